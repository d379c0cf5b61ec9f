use clap::Parser;

use crate::error::Result;
use crate::parser::{ArgParser, DEFAULT_EXIT_CODE};

#[derive(Parser)]
#[command(name = "letteropt")]
#[command(about = "Parses single-letter options and reports the values bound to each key")]
pub struct Cli {
    /// Declare a key and its description (e.g. "a=input files"). Repeatable.
    #[arg(short, long = "key", value_name = "KEY=DESCRIPTION", value_parser = parse_declaration)]
    pub keys: Vec<(char, String)>,

    /// Program name shown in the usage banner
    #[clap(short, long, default_value = "letteropt")]
    pub program: String,

    /// Exit status used when the arguments do not parse
    #[clap(short, long, default_value_t = DEFAULT_EXIT_CODE, allow_negative_numbers = true)]
    pub exit_code: i32,

    /// Print the usage banner for the declared keys and exit
    #[clap(short, long)]
    pub usage: bool,

    /// The arguments to parse, after `--`
    #[arg(last = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Builds a parser over `program` followed by the trailing arguments,
    /// with every `--key` declared.
    pub fn parser(&self) -> Result<ArgParser> {
        let argv = std::iter::once(&self.program).chain(&self.args).cloned();
        let mut parser = ArgParser::new(argv).usage_exit_code(self.exit_code);
        for (key, description) in &self.keys {
            parser.add_key(*key, description)?;
        }
        Ok(parser)
    }
}

fn parse_declaration(s: &str) -> std::result::Result<(char, String), String> {
    let (key, description) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=DESCRIPTION, found `{s}`"))?;

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((c, description.to_string())),
        _ => Err(format!("key must be a single character, found `{key}`")),
    }
}

/// One line per declared key: `<key> present <values...>` or `<key> absent`.
pub fn report(parser: &ArgParser) -> Result<String> {
    let mut out = String::new();
    for (key, _) in parser.declared_keys() {
        let key = key.as_char();
        if parser.is_key_set(key)? {
            out.push_str(&format!("{key} present"));
            parser.for_each_key_arg(key, |value| {
                out.push(' ');
                out.push_str(value);
            })?;
        } else {
            out.push_str(&format!("{key} absent"));
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse_cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("letteropt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_declaration() {
        assert_eq!(parse_declaration("a=all files"), Ok(('a', "all files".to_string())));
        assert_eq!(parse_declaration("b="), Ok(('b', String::new())));
        assert_eq!(parse_declaration("x=a=b"), Ok(('x', "a=b".to_string())));
        assert!(parse_declaration("ab=two letters").is_err());
        assert!(parse_declaration("=empty").is_err());
        assert!(parse_declaration("a").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = parse_cli(&[]);
        assert!(cli.keys.is_empty());
        assert_eq!(cli.program, "letteropt");
        assert_eq!(cli.exit_code, DEFAULT_EXIT_CODE);
        assert!(!cli.usage);
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_trailing_args_follow_double_dash() {
        let cli = parse_cli(&["-k", "a=all", "-e", "-2", "--", "-a", "x"]);
        assert_eq!(cli.keys, [('a', "all".to_string())]);
        assert_eq!(cli.exit_code, -2);
        assert_eq!(cli.args, ["-a", "x"]);
    }

    #[test]
    fn test_report() {
        let cli = parse_cli(&["-k", "a=all", "-k", "b=brief", "-k", "z=zero", "--", "-a", "x", "y", "-z"]);
        let mut parser = cli.parser().unwrap();
        parser.parse().unwrap();

        assert_eq!(report(&parser).unwrap(), "a present x y\nb absent\nz present\n");
    }

    #[test]
    fn test_declaration_errors_surface() {
        let cli = parse_cli(&["-k", "A=upper"]);
        assert_eq!(cli.parser().unwrap_err(), Error::InvalidKey('A'));

        let cli = parse_cli(&["-k", "a="]);
        assert_eq!(cli.parser().unwrap_err(), Error::MissingDescription);
    }
}
