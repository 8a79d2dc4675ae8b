//! Immutable option schema records built at registration time.

use crate::error::Error;
use crate::registry::HandlerId;

/// The logical name of the built-in short help option. Applications must
/// never register it themselves.
pub const RESERVED_HELP_NAME: &str = "h";

/// One declared option: its names, arity, default, and handler binding.
///
/// The lookup key (`option_name`) keeps underscores so switches typed with
/// either spelling resolve to the same entry; the user-facing `switch` uses
/// the hyphenated display form.
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    option_name: String,
    switch: String,
    arg_name: Option<String>,
    is_variable: bool,
    default: Option<String>,
    help_text: String,
    handler: HandlerId,
}

impl OptionDescriptor {
    /// Build a descriptor for a user-registered option, rejecting the
    /// reserved short-help name.
    pub(crate) fn new(
        name: &str,
        arg_name: Option<&str>,
        is_variable: bool,
        default: Option<&str>,
        help_text: &str,
        handler: HandlerId,
    ) -> Result<Self, Error> {
        let option_name = name.replace('-', "_");
        if option_name == RESERVED_HELP_NAME {
            return Err(Error::ReservedName(option_name));
        }
        Ok(Self::build(
            option_name,
            arg_name,
            is_variable,
            default,
            help_text,
            handler,
        ))
    }

    /// Build a descriptor for a built-in option, bypassing the reserved-name
    /// check so the framework can register `h` itself.
    pub(crate) fn builtin(
        name: &str,
        arg_name: Option<&str>,
        is_variable: bool,
        default: Option<&str>,
        help_text: &str,
        handler: HandlerId,
    ) -> Self {
        Self::build(
            name.replace('-', "_"),
            arg_name,
            is_variable,
            default,
            help_text,
            handler,
        )
    }

    fn build(
        option_name: String,
        arg_name: Option<&str>,
        is_variable: bool,
        default: Option<&str>,
        help_text: &str,
        handler: HandlerId,
    ) -> Self {
        let switch = if option_name.chars().count() == 1 {
            format!("-{option_name}")
        } else {
            format!("--{}", option_name.replace('_', "-"))
        };
        Self {
            option_name,
            switch,
            arg_name: arg_name.map(str::to_string),
            is_variable,
            default: default.map(str::to_string),
            help_text: help_text.to_string(),
            handler,
        }
    }

    /// Lookup key: the logical name with underscores retained.
    pub fn option_name(&self) -> &str {
        &self.option_name
    }

    /// The user-facing token: `-x` for single-character names, `--long-name`
    /// otherwise.
    pub fn switch(&self) -> &str {
        &self.switch
    }

    /// Hyphenated display form of the name, as it appears in switch tables.
    pub fn display_name(&self) -> String {
        self.option_name.replace('_', "-")
    }

    pub fn arg_name(&self) -> Option<&str> {
        self.arg_name.as_deref()
    }

    pub fn is_variable(&self) -> bool {
        self.is_variable
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn takes_value(&self) -> bool {
        self.arg_name.is_some()
    }

    pub fn is_long(&self) -> bool {
        self.option_name.chars().count() > 1
    }

    pub(crate) fn handler(&self) -> HandlerId {
        self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_names_are_short_options() {
        let desc = OptionDescriptor::new("x", None, false, None, "", HandlerId(0)).unwrap();
        assert_eq!(desc.switch(), "-x");
        assert!(!desc.is_long());
        assert!(!desc.takes_value());
        assert_eq!(desc.arg_name(), None);
    }

    #[test]
    fn long_names_render_underscores_as_hyphens() {
        let desc =
            OptionDescriptor::new("skip_headers", None, false, None, "", HandlerId(0)).unwrap();
        assert_eq!(desc.switch(), "--skip-headers");
        assert_eq!(desc.option_name(), "skip_headers");
        assert_eq!(desc.display_name(), "skip-headers");
        assert!(desc.is_long());
    }

    #[test]
    fn hyphenated_registration_normalizes_to_underscores() {
        let desc =
            OptionDescriptor::new("skip-headers", None, false, None, "", HandlerId(0)).unwrap();
        assert_eq!(desc.option_name(), "skip_headers");
        assert_eq!(desc.switch(), "--skip-headers");
    }

    #[test]
    fn reserved_name_is_rejected_regardless_of_arity() {
        let err = OptionDescriptor::new("h", None, false, None, "", HandlerId(0)).unwrap_err();
        assert!(matches!(err, Error::ReservedName(name) if name == "h"));

        let err =
            OptionDescriptor::new("h", Some("value"), false, None, "", HandlerId(0)).unwrap_err();
        assert!(matches!(err, Error::ReservedName(_)));
    }

    #[test]
    fn defaulted_value_option_records_metadata() {
        let desc = OptionDescriptor::new(
            "kwd",
            Some("default"),
            false,
            Some("value"),
            "single arg with default",
            HandlerId(3),
        )
        .unwrap();
        assert_eq!(desc.arg_name(), Some("default"));
        assert_eq!(desc.default(), Some("value"));
        assert!(!desc.is_variable());
        assert!(desc.takes_value());
    }
}
