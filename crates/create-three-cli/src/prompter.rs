//! Terminal implementation of the core `Prompter` port.

use std::io::IsTerminal;

use create_three_core::application::ports::{NoPrompt, Prompter};

/// Pick the prompter for this run: the terminal when stdin and stderr are
/// both attached and prompting is allowed, [`NoPrompt`] otherwise.
pub fn select_prompter(no_interactive: bool, colors: bool) -> Box<dyn Prompter> {
    let attached = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();
    if no_interactive || !attached {
        tracing::debug!(no_interactive, attached, "Prompts disabled");
        return Box::new(NoPrompt);
    }
    terminal(colors)
}

#[cfg(feature = "interactive")]
fn terminal(colors: bool) -> Box<dyn Prompter> {
    Box::new(interactive::TerminalPrompter::new(colors))
}

#[cfg(not(feature = "interactive"))]
fn terminal(_colors: bool) -> Box<dyn Prompter> {
    tracing::debug!("Built without the `interactive` feature");
    Box::new(NoPrompt)
}

#[cfg(feature = "interactive")]
mod interactive {
    use std::io;

    use dialoguer::{Input, Select, theme::ColorfulTheme};

    use create_three_core::application::ports::{
        Choice, PromptError, Prompter, SelectPrompt, TextPrompt,
    };

    use crate::output::paint;

    /// `dialoguer` prompts drawn on stderr.
    pub struct TerminalPrompter {
        theme: ColorfulTheme,
        colors: bool,
    }

    impl TerminalPrompter {
        pub fn new(colors: bool) -> Self {
            Self {
                theme: ColorfulTheme::default(),
                colors,
            }
        }

        fn label(&self, choice: &Choice) -> String {
            match choice.color {
                Some(color) if self.colors => paint(&choice.title, color),
                _ => choice.title.clone(),
            }
        }
    }

    impl Prompter for TerminalPrompter {
        fn text(&self, prompt: &TextPrompt) -> Result<String, PromptError> {
            let mut input = Input::<String>::with_theme(&self.theme).with_prompt(&prompt.message);
            if let Some(initial) = &prompt.initial {
                input = input.with_initial_text(initial.clone());
            }
            input.interact_text().map_err(map_error)
        }

        fn select(&self, prompt: &SelectPrompt) -> Result<usize, PromptError> {
            let items: Vec<String> = prompt.choices.iter().map(|c| self.label(c)).collect();
            Select::with_theme(&self.theme)
                .with_prompt(&prompt.message)
                .items(&items)
                .default(prompt.initial)
                .interact_opt()
                .map_err(map_error)?
                .ok_or(PromptError::Interrupted)
        }
    }

    fn map_error(err: dialoguer::Error) -> PromptError {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
                PromptError::Interrupted
            }
            dialoguer::Error::IO(e) => PromptError::Io(e.to_string()),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use create_three_core::domain::ColorTag;

        #[test]
        fn labels_are_plain_without_colour() {
            let prompter = TerminalPrompter::new(false);
            let choice = Choice::colored("Vanilla", ColorTag::Yellow);
            assert_eq!(prompter.label(&choice), "Vanilla");
        }

        #[test]
        fn labels_are_painted_with_colour() {
            let prompter = TerminalPrompter::new(true);
            let choice = Choice::colored("Vanilla", ColorTag::Yellow);
            assert_ne!(prompter.label(&choice), "Vanilla");
            assert_eq!(prompter.label(&Choice::plain("Cancel")), "Cancel");
        }

        #[test]
        fn interrupted_io_maps_to_interrupted() {
            let err = dialoguer::Error::IO(io::Error::from(io::ErrorKind::Interrupted));
            assert_eq!(map_error(err), PromptError::Interrupted);
        }
    }
}
