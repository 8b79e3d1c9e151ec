mod printer;

pub use printer::Printer;
