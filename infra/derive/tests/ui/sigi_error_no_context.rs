use sigi_derive::sigi_error;

#[sigi_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
