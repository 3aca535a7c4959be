//! Spelling dictionary resolution.
//!
//! For a language `lang` and a dictionary directory, the first match wins:
//! 1. `<dir>/<lang>.aff` + `<dir>/<lang>.dic` (Hunspell, via zspell)
//! 2. `<dir>/<lang>.txt` (plain word list)
//!
//! Anything else leaves spelling disabled. Load failures are logged and
//! degrade to the next option instead of failing the command.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use aichecker_core::spelling::edits::{self, MAX_SUGGESTIONS};
use aichecker_core::{DictionaryLookup, WordListDictionary};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

/// A Hunspell dictionary loaded through zspell.
pub struct HunspellDictionary {
    language: String,
    dict: zspell::Dictionary,
    alphabet: Vec<char>,
}

impl HunspellDictionary {
    /// Build from the contents of `.aff` and `.dic` files.
    pub fn from_strings(language: &str, aff: &str, dic: &str) -> anyhow::Result<Self> {
        let dict = zspell::builder()
            .config_str(aff)
            .dict_str(dic)
            .build()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to build hunspell dictionary for '{language}'"))?;

        Ok(Self {
            language: language.to_string(),
            dict,
            alphabet: edits::ascii_alphabet(),
        })
    }
}

impl DictionaryLookup for HunspellDictionary {
    fn language(&self) -> &str {
        &self.language
    }

    fn check(&self, word: &str) -> bool {
        self.dict.check_word(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        if self.check(word) {
            return vec![word.to_string()];
        }
        // No frequency data, so distance-1 hits in alphabetical order.
        let known: BTreeSet<String> = edits::edits1(word, &self.alphabet)
            .into_iter()
            .filter(|candidate| self.dict.check_word(candidate))
            .collect();
        known.into_iter().take(MAX_SUGGESTIONS).collect()
    }
}

/// Whether `lang` is safe to use as a file stem.
fn is_valid_language(lang: &str) -> bool {
    !lang.is_empty()
        && lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Resolve a dictionary for `lang` from `dir`.
///
/// Returns `None` (spelling disabled) when no usable dictionary exists.
#[tracing::instrument(skip_all, fields(lang = %lang, dir = ?dir))]
pub fn load_dictionary(
    dir: Option<&Utf8Path>,
    lang: &str,
) -> Option<Arc<dyn DictionaryLookup>> {
    if !is_valid_language(lang) {
        warn!(lang, "invalid language identifier, spelling disabled");
        return None;
    }
    let Some(dir) = dir else {
        debug!("no dictionary directory, spelling disabled");
        return None;
    };

    let aff = dir.join(format!("{lang}.aff"));
    let dic = dir.join(format!("{lang}.dic"));
    if aff.is_file() && dic.is_file() {
        match load_hunspell(&aff, &dic, lang) {
            Ok(dict) => {
                info!(path = %dic, "loaded hunspell dictionary");
                return Some(Arc::new(dict));
            }
            Err(e) => warn!(error = ?e, "hunspell dictionary unusable"),
        }
    }

    let list = dir.join(format!("{lang}.txt"));
    if list.is_file() {
        match load_word_list(&list, lang) {
            Ok(dict) => {
                info!(path = %list, words = dict.len(), "loaded word list");
                return Some(Arc::new(dict));
            }
            Err(e) => warn!(error = ?e, "word list unusable"),
        }
    }

    debug!("no dictionary found, spelling disabled");
    None
}

/// Dictionaries for one directory, loaded once per language.
///
/// Misses are cached too, so a language without a dictionary is not looked
/// up on disk again.
pub struct DictionaryCache {
    dir: Option<Utf8PathBuf>,
    loaded: Mutex<HashMap<String, Option<Arc<dyn DictionaryLookup>>>>,
}

impl DictionaryCache {
    /// An empty cache over `dir`. `None` never yields a dictionary.
    pub fn new(dir: Option<Utf8PathBuf>) -> Self {
        Self {
            dir,
            loaded: Mutex::new(HashMap::new()),
        }
    }

    /// The dictionary for `lang`, loading it on first use.
    pub fn get(&self, lang: &str) -> Option<Arc<dyn DictionaryLookup>> {
        let mut loaded = self.loaded.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = loaded.get(lang) {
            return entry.clone();
        }
        let entry = load_dictionary(self.dir.as_deref(), lang);
        loaded.insert(lang.to_string(), entry.clone());
        entry
    }
}

fn load_hunspell(
    aff: &Utf8Path,
    dic: &Utf8Path,
    lang: &str,
) -> anyhow::Result<HunspellDictionary> {
    let aff_content =
        std::fs::read_to_string(aff).with_context(|| format!("failed to read {aff}"))?;
    let dic_content =
        std::fs::read_to_string(dic).with_context(|| format!("failed to read {dic}"))?;
    HunspellDictionary::from_strings(lang, &aff_content, &dic_content)
}

fn load_word_list(path: &Utf8Path, lang: &str) -> anyhow::Result<WordListDictionary> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    WordListDictionary::parse(lang, &content).with_context(|| format!("failed to parse {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_dir(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn loads_word_list() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("en.txt"), "sample 5\ntext 3\n").unwrap();

        let dict = load_dictionary(Some(&utf8_dir(&tmp)), "en").expect("dictionary");
        assert_eq!(dict.language(), "en");
        assert!(dict.check("sample"));
        assert_eq!(dict.suggest("smaple"), vec!["sample"]);
    }

    #[test]
    fn missing_language_disables_spelling() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("en.txt"), "sample\n").unwrap();
        assert!(load_dictionary(Some(&utf8_dir(&tmp)), "de").is_none());
    }

    #[test]
    fn no_directory_disables_spelling() {
        assert!(load_dictionary(None, "en").is_none());
    }

    #[test]
    fn nonexistent_directory_disables_spelling() {
        let tmp = TempDir::new().unwrap();
        let missing = utf8_dir(&tmp).join("nope");
        assert!(load_dictionary(Some(&missing), "en").is_none());
    }

    #[test]
    fn malformed_word_list_disables_spelling() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("en.txt"), "word notanumber\n").unwrap();
        assert!(load_dictionary(Some(&utf8_dir(&tmp)), "en").is_none());
    }

    #[test]
    fn path_like_language_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("en.txt"), "sample\n").unwrap();
        assert!(load_dictionary(Some(&utf8_dir(&tmp)), "../en").is_none());
        assert!(load_dictionary(Some(&utf8_dir(&tmp)), "").is_none());
    }

    #[test]
    fn language_identifiers() {
        assert!(is_valid_language("en"));
        assert!(is_valid_language("en_US"));
        assert!(is_valid_language("pt-BR"));
        assert!(!is_valid_language("en/US"));
        assert!(!is_valid_language("en.txt"));
    }

    const AFF: &str = "SET UTF-8\n";
    const DIC: &str = "3\nsample\ntext\nsimple\n";

    #[test]
    fn hunspell_checks_and_suggests() {
        let dict = HunspellDictionary::from_strings("en", AFF, DIC).expect("dictionary");
        assert_eq!(dict.language(), "en");
        assert!(dict.check("sample"));
        assert!(!dict.check("smaple"));
        assert_eq!(dict.suggest("simpel"), vec!["simple"]);
        assert_eq!(dict.suggest("text"), vec!["text"]);
    }

    #[test]
    fn hunspell_preferred_over_word_list() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("en.aff"), AFF).unwrap();
        fs::write(tmp.path().join("en.dic"), DIC).unwrap();
        fs::write(tmp.path().join("en.txt"), "zebra\n").unwrap();

        let dict = load_dictionary(Some(&utf8_dir(&tmp)), "en").expect("dictionary");
        assert!(dict.check("sample"));
        assert!(!dict.check("zebra"));
    }

    #[test]
    fn hunspell_needs_both_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("en.dic"), DIC).unwrap();
        fs::write(tmp.path().join("en.txt"), "zebra\n").unwrap();

        let dict = load_dictionary(Some(&utf8_dir(&tmp)), "en").expect("dictionary");
        assert!(dict.check("zebra"));
        assert!(!dict.check("sample"));
    }

    #[test]
    fn cache_loads_each_language_once() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("en.txt"), "sample\n").unwrap();
        let cache = DictionaryCache::new(Some(utf8_dir(&tmp)));

        let first = cache.get("en").expect("dictionary");
        fs::remove_file(tmp.path().join("en.txt")).unwrap();
        let second = cache.get("en").expect("still cached");
        assert!(Arc::ptr_eq(&first, &second));

        assert!(cache.get("de").is_none());
        fs::write(tmp.path().join("de.txt"), "wort\n").unwrap();
        assert!(cache.get("de").is_none(), "misses are cached");
    }
}
