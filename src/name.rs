use std::fmt;

/// A resolved XML name.
///
/// `namespace` is the URI the name's prefix (or the default namespace)
/// resolved to; an empty string means the name is in no namespace. A prefix
/// that is not declared anywhere in scope is carried here verbatim.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Name {
    pub namespace: String,
    pub local_name: String,
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.namespace.is_empty() {
            write!(f, "{{{}}}", self.namespace)?;
        }

        write!(f, "{}", self.local_name)
    }
}

impl Name {
    /// Creates a name in no namespace.
    pub fn local(local_name: impl Into<String>) -> Name {
        Name {
            namespace: String::new(),
            local_name: local_name.into(),
        }
    }

    /// Creates a name qualified with a namespace URI.
    pub fn qualified(namespace: impl Into<String>, local_name: impl Into<String>) -> Name {
        Name {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Name;

    #[test]
    fn name_display() {
        assert_eq!(&*Name::local("root").to_string(), "root");
        assert_eq!(
            &*Name::qualified("urn:example", "root").to_string(),
            "{urn:example}root"
        );
    }
}
