use crate::key::Key;

/// Renders the usage banner: a header naming the program, then one line per
/// declared key.
pub fn render<'a, I>(program: &str, keys: I) -> String
where
    I: IntoIterator<Item = (Key, &'a str)>,
{
    let mut text = format!("Usage: {program} [OPTION]...\n");
    for (key, description) in keys {
        text.push_str(&format!("\t-{key}\t\t\t{description}\n"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let keys: [(Key, &str); 0] = [];
        assert_eq!(render("prog", keys), "Usage: prog [OPTION]...\n");
    }

    #[test]
    fn test_one_line_per_key() {
        let keys = [
            (Key::new('a').unwrap(), "all files"),
            (Key::new('v').unwrap(), "verbose"),
        ];
        assert_eq!(
            render("./tool", keys),
            "Usage: ./tool [OPTION]...\n\t-a\t\t\tall files\n\t-v\t\t\tverbose\n"
        );
    }
}
