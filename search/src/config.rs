use typeahead_core::TypeaheadConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMatching {
    Sensitive,
    #[default]
    Insensitive,
}

impl CaseMatching {
    pub fn from_flag(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseMatching::Sensitive
        } else {
            CaseMatching::Insensitive
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
}

impl From<&TypeaheadConfig> for SearchConfig {
    fn from(config: &TypeaheadConfig) -> Self {
        Self {
            case_matching: CaseMatching::from_flag(config.case_sensitive),
        }
    }
}
