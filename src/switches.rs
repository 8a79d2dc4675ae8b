//! Switch tables consumed by the getopt-style tokenizer.
//!
//! Short options become a spec string with `:` after value-takers; long
//! options become a list with `=` after value-takers. Hyphenated long names
//! also get an underscore-spelled twin so either form is accepted.

use crate::descriptor::OptionDescriptor;

pub(crate) fn short_spec<'a>(descs: impl Iterator<Item = &'a OptionDescriptor>) -> String {
    let mut spec = String::new();
    for desc in descs.filter(|d| !d.is_long()) {
        spec.push_str(&desc.display_name());
        if desc.takes_value() {
            spec.push(':');
        }
    }
    spec
}

pub(crate) fn long_spec<'a>(descs: impl Iterator<Item = &'a OptionDescriptor>) -> Vec<String> {
    let mut list = Vec::new();
    for desc in descs.filter(|d| d.is_long()) {
        let mut entry = desc.display_name();
        if desc.takes_value() {
            entry.push('=');
        }
        if entry.contains('-') {
            list.push(entry.replace('-', "_"));
        }
        list.push(entry);
    }
    list
}

#[cfg(test)]
mod tests {
    use crate::registry::OptionSet;

    struct Tester;

    #[test]
    fn builtin_switch_tables() {
        let set: OptionSet<Tester> = OptionSet::with_builtins();
        assert_eq!(set.short_options_spec(), "hqv");
        assert_eq!(
            set.long_options_spec(),
            vec!["help".to_string(), "quiet".into(), "verbose=".into()]
        );
    }

    #[test]
    fn value_takers_carry_markers() {
        let mut set: OptionSet<Tester> = OptionSet::new();
        set.value("o", "path", None, "", |_, _, _| Ok(())).unwrap();
        set.variadic("skip_fields", "field", "", |_, _, _| Ok(()))
            .unwrap();
        set.flag("x", "", |_, _| Ok(())).unwrap();
        assert_eq!(set.short_options_spec(), "o:x");
        assert_eq!(
            set.long_options_spec(),
            vec!["skip_fields=".to_string(), "skip-fields=".into()]
        );
    }
}
