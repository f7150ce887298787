/// The closed set of BPE encodings that can be selected by name.
use crate::error::TokenizerError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer as TiktokenEncoding};

/// A named BPE vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Gpt2,
    Cl100kBase,
    O200kBase,
    P50kBase,
    P50kEdit,
    R50kBase,
}

impl Encoding {
    /// Every supported encoding, in the order they are listed to users.
    pub const ALL: [Encoding; 6] = [
        Encoding::Gpt2,
        Encoding::Cl100kBase,
        Encoding::O200kBase,
        Encoding::P50kBase,
        Encoding::P50kEdit,
        Encoding::R50kBase,
    ];

    /// The identifier accepted by `--encoding`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Gpt2 => "gpt2",
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::P50kEdit => "p50k_edit",
            Encoding::R50kBase => "r50k_base",
        }
    }

    /// Resolve a model alias (e.g. `gpt-4`, `gpt-4o-2024-05-13`) to its encoding.
    ///
    /// Returns `None` for names tiktoken does not know.
    pub fn for_model(model: &str) -> Option<Self> {
        get_tokenizer(model).map(Self::from)
    }
}

impl From<TiktokenEncoding> for Encoding {
    fn from(encoding: TiktokenEncoding) -> Self {
        match encoding {
            TiktokenEncoding::Gpt2 => Encoding::Gpt2,
            TiktokenEncoding::Cl100kBase => Encoding::Cl100kBase,
            TiktokenEncoding::O200kBase => Encoding::O200kBase,
            TiktokenEncoding::P50kBase => Encoding::P50kBase,
            TiktokenEncoding::P50kEdit => Encoding::P50kEdit,
            TiktokenEncoding::R50kBase => Encoding::R50kBase,
        }
    }
}

impl From<Encoding> for TiktokenEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Gpt2 => TiktokenEncoding::Gpt2,
            Encoding::Cl100kBase => TiktokenEncoding::Cl100kBase,
            Encoding::O200kBase => TiktokenEncoding::O200kBase,
            Encoding::P50kBase => TiktokenEncoding::P50kBase,
            Encoding::P50kEdit => TiktokenEncoding::P50kEdit,
            Encoding::R50kBase => TiktokenEncoding::R50kBase,
        }
    }
}

impl FromStr for Encoding {
    type Err = TokenizerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|encoding| encoding.as_str() == name)
            .ok_or_else(|| TokenizerError::InvalidEncoding {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AVAILABLE_ENCODINGS;

    #[test]
    fn parses_every_listed_encoding() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.as_str().parse::<Encoding>().ok(), Some(encoding));
        }
    }

    #[test]
    fn listed_names_match_error_message() {
        let names: Vec<&str> = Encoding::ALL.iter().map(Encoding::as_str).collect();
        assert_eq!(names.join(", "), AVAILABLE_ENCODINGS);
    }

    #[test]
    fn rejects_unknown_and_miscased_names() {
        assert!(matches!(
            "bogus".parse::<Encoding>(),
            Err(TokenizerError::InvalidEncoding { name }) if name == "bogus"
        ));
        assert!("CL100K_BASE".parse::<Encoding>().is_err());
    }

    #[test]
    fn resolves_model_aliases() {
        assert_eq!(Encoding::for_model("gpt-4"), Some(Encoding::Cl100kBase));
        assert_eq!(Encoding::for_model("gpt-3.5-turbo"), Some(Encoding::Cl100kBase));
        assert_eq!(Encoding::for_model("gpt-4o"), Some(Encoding::O200kBase));
        assert_eq!(Encoding::for_model("text-davinci-003"), Some(Encoding::P50kBase));
        assert_eq!(Encoding::for_model("not-a-model"), None);
    }
}
