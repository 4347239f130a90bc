//! Options offered by the dropdown and their identities.

use std::any::Any;
use std::fmt;

/// A value/label pair the dropdown offers for selection.
///
/// `T` is whatever the host wants back: a country code, a numeric id, a
/// whole record. Only `label` is shown and searched.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<T> {
    /// The caller's value, returned untouched on selection.
    pub value: T,
    /// Display text, also the text the filter matches against.
    pub label: String,
}

impl<T> SelectOption<T> {
    /// Create an option.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl SelectOption<String> {
    /// Create an option whose value is its own label.
    pub fn simple(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

/// Identity of an option, used to compare selections and to detect
/// duplicate rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    /// A string identity.
    Text(String),
    /// Any integer identity.
    Int(i128),
    /// A float identity, compared by bit pattern.
    Float(u64),
    /// A boolean identity.
    Bool(bool),
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKey::Text(s) => f.write_str(s),
            OptionKey::Int(n) => write!(f, "{n}"),
            OptionKey::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            OptionKey::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for OptionKey {
    fn from(s: &str) -> Self {
        OptionKey::Text(s.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(s: String) -> Self {
        OptionKey::Text(s)
    }
}

macro_rules! int_keys {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OptionKey {
                fn from(n: $t) -> Self {
                    OptionKey::Int(n as i128)
                }
            }
        )*
    };
}

int_keys!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Caller-supplied identity function.
pub type KeyFn<T> = Box<dyn Fn(&SelectOption<T>) -> OptionKey + Send>;

/// Key for a primitive value, or `None` when `value` is a compound type.
///
/// Strings, characters, booleans, integers and floats identify themselves;
/// anything else falls back to the label in [`default_key`].
pub fn primitive_key(value: &dyn Any) -> Option<OptionKey> {
    macro_rules! try_ints {
        ($($t:ty),*) => {
            $(
                if let Some(n) = value.downcast_ref::<$t>() {
                    return Some(OptionKey::Int(*n as i128));
                }
            )*
        };
    }

    if let Some(s) = value.downcast_ref::<String>() {
        return Some(OptionKey::Text(s.clone()));
    }
    if let Some(s) = value.downcast_ref::<&'static str>() {
        return Some(OptionKey::Text((*s).to_string()));
    }
    if let Some(c) = value.downcast_ref::<char>() {
        return Some(OptionKey::Text(c.to_string()));
    }
    if let Some(b) = value.downcast_ref::<bool>() {
        return Some(OptionKey::Bool(*b));
    }
    try_ints!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
    if let Some(x) = value.downcast_ref::<f64>() {
        return Some(OptionKey::Float(x.to_bits()));
    }
    if let Some(x) = value.downcast_ref::<f32>() {
        return Some(OptionKey::Float(f64::from(*x).to_bits()));
    }
    None
}

/// Identity used when no key function is configured: the value itself when
/// it is a primitive, otherwise the label.
pub fn default_key<T: 'static>(option: &SelectOption<T>) -> OptionKey {
    primitive_key(&option.value).unwrap_or_else(|| OptionKey::Text(option.label.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: u32,
        email: &'static str,
    }

    #[test]
    fn string_values_key_by_value() {
        let opt = SelectOption::new("us".to_string(), "United States");
        assert_eq!(default_key(&opt), OptionKey::Text("us".into()));

        let opt = SelectOption::new("ca", "Canada");
        assert_eq!(default_key(&opt), OptionKey::Text("ca".into()));
    }

    #[test]
    fn integer_values_key_by_value() {
        assert_eq!(default_key(&SelectOption::new(3u8, "Three")), OptionKey::Int(3));
        assert_eq!(default_key(&SelectOption::new(-2i64, "Minus")), OptionKey::Int(-2));
        assert_eq!(
            default_key(&SelectOption::new(u64::MAX, "Max")),
            OptionKey::Int(u64::MAX as i128)
        );
    }

    #[test]
    fn float_and_bool_values() {
        assert_eq!(
            default_key(&SelectOption::new(1.5f64, "One and a half")),
            OptionKey::Float(1.5f64.to_bits())
        );
        assert_eq!(default_key(&SelectOption::new(true, "Yes")), OptionKey::Bool(true));
    }

    #[test]
    fn records_key_by_label() {
        let opt = SelectOption::new(
            User {
                id: 1,
                email: "john@example.com",
            },
            "John Doe (Admin)",
        );
        assert_eq!(default_key(&opt), OptionKey::Text("John Doe (Admin)".into()));
        assert_eq!(opt.value.email, "john@example.com");
    }

    #[test]
    fn simple_uses_label_as_value() {
        let opt = SelectOption::simple("Kiwi");
        assert_eq!(opt.value, "Kiwi");
        assert_eq!(opt.label, "Kiwi");
    }

    #[test]
    fn key_display() {
        assert_eq!(OptionKey::from(7u32).to_string(), "7");
        assert_eq!(OptionKey::from("de").to_string(), "de");
        assert_eq!(OptionKey::Float(2.5f64.to_bits()).to_string(), "2.5");
    }

    #[test]
    fn custom_key_fn_reads_record_field() {
        let key: KeyFn<User> = Box::new(|o| OptionKey::from(o.value.id));
        let opt = SelectOption::new(
            User {
                id: 42,
                email: "x@example.com",
            },
            "X",
        );
        assert_eq!(key(&opt), OptionKey::Int(42));
    }
}
