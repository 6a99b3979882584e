use crate::models::term::{NewTerm, Term};

/// 参与检索的九个字段，顺序即拼接顺序
pub trait SearchFields {
    fn search_fields(&self) -> [Option<&str>; 9];
}

/// 生成 search_text: 九个字段以空格拼接后转小写，缺失字段按空串处理
pub fn derive_search_text<T: SearchFields + ?Sized>(term: &T) -> String {
    term.search_fields()
        .iter()
        .map(|field| field.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl SearchFields for NewTerm {
    fn search_fields(&self) -> [Option<&str>; 9] {
        [
            Some(self.chinese_simplified.as_str()),
            self.chinese_traditional.as_deref(),
            self.pinyin.as_deref(),
            Some(self.english_term.as_str()),
            self.english_aliases.as_deref(),
            self.definition_en.as_deref(),
            self.definition_zh.as_deref(),
            self.etymology.as_deref(),
            self.clinical_notes.as_deref(),
        ]
    }
}

impl SearchFields for Term {
    fn search_fields(&self) -> [Option<&str>; 9] {
        [
            Some(self.chinese_simplified.as_str()),
            self.chinese_traditional.as_deref(),
            self.pinyin.as_deref(),
            Some(self.english_term.as_str()),
            self.english_aliases.as_deref(),
            self.definition_en.as_deref(),
            self.definition_zh.as_deref(),
            self.etymology.as_deref(),
            self.clinical_notes.as_deref(),
        ]
    }
}
