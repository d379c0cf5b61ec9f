use std::io::Write;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Illegal key: {:#04x}({})", code_point(.0), .0)]
    InvalidKey(char),
    #[error("Invalid description")]
    MissingDescription,
    #[error("Key '{0}' was never declared")]
    UndeclaredKey(char),
    #[error("{text}")]
    Usage { text: String, exit_code: i32 },
}

fn code_point(key: &char) -> u32 {
    u32::from(*key)
}

impl Error {
    /// Reports the error and terminates the process.
    ///
    /// Usage errors print their banner to stdout and exit with the code they
    /// carry. Everything else goes to stderr with status 1.
    pub fn exit(self) -> ! {
        match self {
            Error::Usage { text, exit_code } => {
                print!("{text}");
                std::io::stdout().flush().ok();
                std::process::exit(exit_code)
            }
            err => {
                eprintln!("{err}");
                std::process::exit(1)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait GetExitCode {
    fn get_exit_code(&self) -> i32;
}

impl<T> GetExitCode for Result<T> {
    fn get_exit_code(&self) -> i32 {
        match self {
            Ok(_) => 0,
            Err(Error::Usage { exit_code, .. }) => *exit_code,
            Err(_) => 1,
        }
    }
}
