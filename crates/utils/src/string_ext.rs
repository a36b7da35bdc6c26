/// Extends string types with useful functions
pub trait StringExt {
    /// Capilalises the first letter in a string
    ///
    /// ```rust
    /// # use stools_utils::StringExt;
    /// assert_eq!("test string".capitalise(), "Test string".to_string());
    /// ```
    fn capitalise(&self) -> String;

    /// Lower-cases the first letter in a string
    ///
    /// ```rust
    /// # use stools_utils::StringExt;
    /// assert_eq!("AsList".decapitalise(), "asList".to_string());
    /// assert_eq!("S0".decapitalise(), "s0".to_string());
    /// ```
    fn decapitalise(&self) -> String;

    /// True for names still in the raw Serpent form
    ///
    /// Raw names are upper-case and separated by underscores, so anything with
    /// an underscore or without a single lower-case letter counts.
    ///
    /// ```rust
    /// # use stools_utils::StringExt;
    /// assert!("INF_S0".is_raw_name());
    /// assert!("ADENS".is_raw_name());
    /// assert!(!"infS0".is_raw_name());
    /// ```
    fn is_raw_name(&self) -> bool;

    /// Convert a Serpent variable name to the camelCase storage name
    ///
    /// Segments are split on underscores, the first is lower-cased and the
    /// rest capitalised. Names already in camelCase are returned untouched so
    /// the conversion can be applied to user queries as well as raw keys.
    ///
    /// ```rust
    /// # use stools_utils::StringExt;
    /// assert_eq!("INF_S0".to_variable_name(), "infS0");
    /// assert_eq!("MACRO_E".to_variable_name(), "macroE");
    /// assert_eq!("B1_1".to_variable_name(), "b11");
    /// assert_eq!("ADENS".to_variable_name(), "adens");
    ///
    /// // already converted
    /// assert_eq!("ingTox".to_variable_name(), "ingTox");
    /// ```
    fn to_variable_name(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }

    fn decapitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_lowercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }

    fn is_raw_name(&self) -> bool {
        let name = self.as_ref();
        name.contains('_') || !name.chars().any(char::is_lowercase)
    }

    fn to_variable_name(&self) -> String {
        if !self.is_raw_name() {
            return self.as_ref().to_string();
        }

        let mut segments = self.as_ref().split('_').filter(|s| !s.is_empty());
        let mut name = segments.next().unwrap_or_default().to_lowercase();
        for segment in segments {
            name.push_str(&segment.to_lowercase().capitalise());
        }
        name
    }
}
