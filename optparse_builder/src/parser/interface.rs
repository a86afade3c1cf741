use crate::parser::base::ParseError;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }
}


#[cfg(test)]
mod tests {
    use super::util::InMemoryInterface;
    use super::*;

    #[test]
    fn in_memory_print() {
        let interface = InMemoryInterface::default();
        interface.print("abc".to_string());
        interface.print("123".to_string());

        assert_eq!(interface.consume_message(), "abc\n123");
    }

    #[test]
    fn in_memory_print_error() {
        let interface = InMemoryInterface::default();
        interface.print_error(ParseError::MissingOptionsHelp("help".to_string()));

        assert_eq!(
            interface.consume_error(),
            ParseError::MissingOptionsHelp("help".to_string())
        );
    }

    #[test]
    fn in_memory_empty() {
        let interface = InMemoryInterface::default();

        assert_eq!(interface.consume(), (None, None));
    }
}
