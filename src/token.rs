use crate::attribute::Attribute;
use crate::name::Name;

/// A single XML token produced by the tokenizer.
///
/// Element names and attribute names carry resolved namespaces; the
/// remaining kinds carry the literal bytes of the source, with no entity
/// expansion and no whitespace normalization.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Token {
    StartElement {
        name: Name,
        attributes: Vec<Attribute>,
    },

    EndElement {
        name: Name,
    },

    /// Character data between tags, un-unescaped, or the literal content of
    /// a CDATA section.
    CharData(Vec<u8>),

    /// The bytes between `<!--` and `-->`, exclusive.
    Comment(Vec<u8>),

    /// The bytes between `<!` and `>`, exclusive. Produced for DOCTYPE and
    /// other declarations which are neither comments nor processing
    /// instructions.
    Directive(Vec<u8>),

    /// A processing instruction: the target name and the bytes between the
    /// target and `?>`.
    ProcessingInstruction {
        target: String,
        data: Vec<u8>,
    },
}

impl Token {
    pub fn start_element(name: Name, attributes: impl IntoIterator<Item = Attribute>) -> Token {
        Token::StartElement {
            name,
            attributes: attributes.into_iter().collect(),
        }
    }

    pub fn end_element(name: Name) -> Token {
        Token::EndElement { name }
    }

    pub fn char_data(data: impl Into<Vec<u8>>) -> Token {
        Token::CharData(data.into())
    }

    pub fn comment(data: impl Into<Vec<u8>>) -> Token {
        Token::Comment(data.into())
    }

    pub fn directive(data: impl Into<Vec<u8>>) -> Token {
        Token::Directive(data.into())
    }

    pub fn processing_instruction(target: impl Into<String>, data: impl Into<Vec<u8>>) -> Token {
        Token::ProcessingInstruction {
            target: target.into(),
            data: data.into(),
        }
    }
}
