use anyhow::Result;
use std::io::{self, Write};

pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_input(&format!("{} [y/N]: ", prompt))?;
        match parse_yes_no(&input) {
            Some(answer) => return Ok(answer),
            None => println!("Please enter 'y' or 'n'"),
        }
    }
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no(""), Some(false));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
    }
}
