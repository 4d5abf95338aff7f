//! Classification of the command tokens.
//!
//! Only the first token selects the command. `show` and `prompt` need a second
//! token; without one they are unrecognized. Tokens past the ones a command
//! uses are ignored.

/// What the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No command token at all
    NoArgs,
    List,
    /// Raw index argument, parsed when the command runs
    Show(String),
    Prompt(String),
    /// Anything else, including `show`/`prompt` missing their argument
    Unknown(String),
}

impl Invocation {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let Some((command, rest)) = args.split_first() else {
            return Invocation::NoArgs;
        };
        let argument = rest.first().map(|s| s.as_ref().to_string());

        match (command.as_ref(), argument) {
            ("list", _) => Invocation::List,
            ("show", Some(index)) => Invocation::Show(index),
            ("prompt", Some(topic)) => Invocation::Prompt(topic),
            (other, _) => Invocation::Unknown(other.to_string()),
        }
    }

    /// Short name used for the command span.
    pub fn name(&self) -> &'static str {
        match self {
            Invocation::NoArgs => "usage",
            Invocation::List => "list",
            Invocation::Show(_) => "show",
            Invocation::Prompt(_) => "prompt",
            Invocation::Unknown(_) => "unknown",
        }
    }
}
