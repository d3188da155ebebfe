//! Create-poll form: three text fields edited in place

use votestream_domain::{DomainError, NewPoll};

/// Separator between options in the options field
pub const OPTION_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Question,
    Theme,
    Options,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Question, FormField::Theme, FormField::Options];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Question => "Question",
            FormField::Theme => "Theme",
            FormField::Options => "Options (comma separated)",
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Question => 0,
            FormField::Theme => 1,
            FormField::Options => 2,
        }
    }
}

/// Input state of the create-poll overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForm {
    values: [String; 3],
    pub focus: FormField,
}

impl CreateForm {
    /// Empty form with the theme field pre-filled
    pub fn new(theme: &str) -> Self {
        Self {
            values: [String::new(), theme.to_string(), String::new()],
            focus: FormField::Question,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn push(&mut self, c: char) {
        self.values[self.focus.index()].push(c);
    }

    pub fn backspace(&mut self) {
        self.values[self.focus.index()].pop();
    }

    pub fn next_field(&mut self) {
        self.focus = FormField::ALL[(self.focus.index() + 1) % FormField::ALL.len()];
    }

    pub fn previous_field(&mut self) {
        let len = FormField::ALL.len();
        self.focus = FormField::ALL[(self.focus.index() + len - 1) % len];
    }

    pub fn on_last_field(&self) -> bool {
        self.focus == FormField::Options
    }

    /// Validated creation request
    pub fn submit(&self) -> Result<NewPoll, DomainError> {
        NewPoll::new(
            self.value(FormField::Question),
            self.value(FormField::Theme),
            self.value(FormField::Options).split(OPTION_SEPARATOR),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut CreateForm, text: &str) {
        text.chars().for_each(|c| form.push(c));
    }

    #[test]
    fn test_fields_cycle() {
        let mut form = CreateForm::new("tech");
        assert_eq!(form.focus, FormField::Question);
        form.next_field();
        form.next_field();
        assert!(form.on_last_field());
        form.next_field();
        assert_eq!(form.focus, FormField::Question);
        form.previous_field();
        assert_eq!(form.focus, FormField::Options);
    }

    #[test]
    fn test_submit_builds_request() {
        let mut form = CreateForm::new("tech");
        type_text(&mut form, "Best editor?");
        form.focus = FormField::Options;
        type_text(&mut form, "Vim, Emacs ,Helix");

        let poll = form.submit().unwrap();
        assert_eq!(poll.question, "Best editor?");
        assert_eq!(poll.theme.as_str(), "tech");
        let options: Vec<_> = poll.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(options, ["Vim", "Emacs", "Helix"]);
    }

    #[test]
    fn test_submit_rejects_blank_option() {
        let mut form = CreateForm::new("tech");
        type_text(&mut form, "Best editor?");
        form.focus = FormField::Options;
        type_text(&mut form, "Vim,,Emacs");
        assert_eq!(
            form.submit(),
            Err(DomainError::InvalidPoll("Option 2 is required".into()))
        );

        for _ in 0..",,Emacs".len() {
            form.backspace();
        }
        assert_eq!(form.value(FormField::Options), "Vim");
        assert!(form.submit().is_err());
    }
}
