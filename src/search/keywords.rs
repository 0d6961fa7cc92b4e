//! English → Arabic keyword index.
//!
//! Program titles and summaries in the catalog are Arabic, while agents
//! query in English. Each English term (or fixed multi-word phrase) maps to
//! a list of Arabic stems; a stem matches by plain substring containment, so
//! "برمج" hits both "برمجة" and "البرمجيات".

use std::collections::{BTreeMap, HashMap};

/// Built-in term table, grouped by domain.
const BUILTIN_KEYWORDS: &[(&str, &[&str])] = &[
    // Tech & engineering
    ("software", &["برمج", "تطوير", "حاسب", "تطبيق", "برنامج"]),
    ("engineer", &["هندس", "تقني", "مهني"]),
    ("programming", &["برمج", "تطوير", "حاسب"]),
    ("developer", &["تطوير", "برمج", "تطبيق"]),
    ("web", &["ويب", "تطوير", "تطبيق"]),
    ("data", &["بيانات", "تحليل", "ذكاء"]),
    ("ai", &["ذكاء", "اصطناعي", "بيانات"]),
    ("artificial intelligence", &["ذكاء", "اصطناعي"]),
    ("machine learning", &["ذكاء", "اصطناعي", "تعلم"]),
    ("cyber", &["سيبران", "أمن", "حماية"]),
    ("security", &["أمن", "سيبران", "حماية"]),
    ("cloud", &["سحاب", "حوسبة"]),
    ("network", &["شبك", "اتصال"]),
    ("game", &["ألعاب", "تصميم"]),
    ("digital", &["رقم", "تحول", "إلكتروني"]),
    ("iot", &["إنترنت", "أشياء"]),
    // Business & management
    ("business", &["إدار", "أعمال", "تجار"]),
    ("management", &["إدار", "قياد"]),
    ("marketing", &["تسويق", "إعلان"]),
    ("finance", &["مال", "محاسب", "اقتصاد"]),
    ("accounting", &["محاسب", "مال"]),
    ("hr", &["موارد", "بشري"]),
    ("human resources", &["موارد", "بشري"]),
    ("project", &["مشروع", "إدار"]),
    ("leadership", &["قياد", "إدار"]),
    ("entrepreneur", &["ريادة", "أعمال"]),
    ("logistics", &["لوجست", "إمداد", "سلسل"]),
    ("supply chain", &["إمداد", "سلسل", "لوجست"]),
    // Health
    ("health", &["صح", "طب", "رعاي"]),
    ("medical", &["طب", "صح"]),
    ("nursing", &["تمريض", "صح"]),
    ("pharmacy", &["صيدل", "دواء"]),
    ("nutrition", &["تغذ", "غذا"]),
    ("public health", &["صحة", "عامة"]),
    // Education
    ("education", &["تعليم", "تدريس", "تربو"]),
    ("teaching", &["تدريس", "تعليم"]),
    ("training", &["تدريب", "تأهيل"]),
    ("early childhood", &["طفولة", "أطفال"]),
    // Law, public sector & the rest
    ("law", &["قانون", "حقوق", "نظام"]),
    ("legal", &["قانون", "حقوق"]),
    ("tourism", &["سياح", "ضياف"]),
    ("hospitality", &["ضياف", "فندق"]),
    ("media", &["إعلام", "اتصال"]),
    ("public relations", &["علاقات", "عامة", "اتصال"]),
    ("design", &["تصميم", "إبداع"]),
    ("architecture", &["عمار", "تصميم"]),
    ("environment", &["بيئ", "استدام"]),
    ("energy", &["طاق", "كهرب"]),
    ("agriculture", &["زراع", "غذا"]),
];

/// Immutable lookup table from normalized English terms to Arabic stems.
///
/// Built once at startup and handed to [`RankingEngine`](super::RankingEngine)
/// by reference.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    entries: HashMap<String, Vec<String>>,
}

impl KeywordIndex {
    /// Index containing only the built-in term table
    pub fn builtin() -> Self {
        let entries = BUILTIN_KEYWORDS
            .iter()
            .map(|(term, stems)| {
                (
                    (*term).to_string(),
                    stems.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Built-in table extended with extra entries (typically from config).
    ///
    /// Extra stems for an existing term are appended after the built-in ones.
    pub fn with_extra(extra: &BTreeMap<String, Vec<String>>) -> Self {
        let mut index = Self::builtin();
        for (term, stems) in extra {
            index.insert(term, stems.iter().cloned());
        }
        index
    }

    /// Add stems under a term. The term is normalized the same way queries are.
    pub fn insert(&mut self, term: &str, stems: impl IntoIterator<Item = String>) {
        let key = normalize_key(term);
        if key.is_empty() {
            return;
        }
        self.entries.entry(key).or_default().extend(stems);
    }

    /// Stems for a normalized term, or an empty slice on a miss
    pub fn lookup(&self, term: &str) -> &[String] {
        self.entries.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Lowercase and collapse whitespace runs to single spaces.
pub fn normalize_key(term: &str) -> String {
    term.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
