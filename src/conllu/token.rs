//! Annotated token.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of tab-separated fields on a token line.
pub const NB_FIELDS: usize = 10;

/// A single token line, split into its 10 fields.
///
/// Fields are kept as raw strings, so that writing back a token
/// yields the exact same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    id: String,
    form: String,
    lemma: String,
    upos: String,
    xpos: String,
    feats: String,
    head: String,
    deprel: String,
    deps: String,
    misc: String,
}

impl Token {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Surface form.
    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Universal part-of-speech tag.
    pub fn upos(&self) -> &str {
        &self.upos
    }

    pub fn xpos(&self) -> &str {
        &self.xpos
    }

    pub fn feats(&self) -> &str {
        &self.feats
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn deprel(&self) -> &str {
        &self.deprel
    }

    pub fn deps(&self) -> &str {
        &self.deps
    }

    pub fn misc(&self) -> &str {
        &self.misc
    }

    fn fields(&self) -> [&str; NB_FIELDS] {
        [
            &self.id,
            &self.form,
            &self.lemma,
            &self.upos,
            &self.xpos,
            &self.feats,
            &self.head,
            &self.deprel,
            &self.deps,
            &self.misc,
        ]
    }
}

impl FromStr for Token {
    type Err = Error;

    /// Split a token line on tabs.
    ///
    /// # Errors
    /// Returns [Error::MalformedToken] if the line does not hold exactly 10 fields.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            [id, form, lemma, upos, xpos, feats, head, deprel, deps, misc] => Ok(Self {
                id: id.to_string(),
                form: form.to_string(),
                lemma: lemma.to_string(),
                upos: upos.to_string(),
                xpos: xpos.to_string(),
                feats: feats.to_string(),
                head: head.to_string(),
                deprel: deprel.to_string(),
                deps: deps.to_string(),
                misc: misc.to_string(),
            }),
            _ => Err(Error::MalformedToken(fields.len())),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields().join("\t"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse() {
        let line = "1\tKissa\tkissa\tNOUN\tN\tCase=Nom|Number=Sing\t2\tnsubj\t_\t_";
        let token: Token = line.parse().unwrap();
        assert_eq!(token.id(), "1");
        assert_eq!(token.form(), "Kissa");
        assert_eq!(token.lemma(), "kissa");
        assert_eq!(token.upos(), "NOUN");
        assert_eq!(token.feats(), "Case=Nom|Number=Sing");
        assert_eq!(token.head(), "2");
        assert_eq!(token.deprel(), "nsubj");
        assert_eq!(token.misc(), "_");
    }

    #[test]
    fn test_roundtrip_line() {
        // empty fields and trailing spaces have to survive
        let line = "3\t.\t.\tPUNCT\t \t\t2\tpunct\t_\tSpaceAfter=No ";
        let token: Token = line.parse().unwrap();
        assert_eq!(token.to_string(), line);
    }

    #[test]
    fn test_wrong_field_count() {
        let short = "1\tkissa\tkissa\tNOUN";
        match short.parse::<Token>() {
            Err(Error::MalformedToken(4)) => (),
            other => panic!("unexpected result: {:?}", other),
        }

        let long = "1\t2\t3\t4\t5\t6\t7\t8\t9\t10\t11";
        assert!(matches!(
            long.parse::<Token>(),
            Err(Error::MalformedToken(11))
        ));
    }
}
