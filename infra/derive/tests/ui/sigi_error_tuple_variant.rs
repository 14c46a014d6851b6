use sigi_derive::sigi_error;

#[sigi_error]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
