use regex::Regex;

/// Фильтр по имени корреспондента для команд dump/export/stats.
///
/// Шаблон с '*' или '?' компилируется в якорный regex (glob-семантика),
/// всё остальное - поиск подстроки. Сравнение без учёта регистра.
#[derive(Debug, Clone)]
pub enum NameFilter {
    Glob(Regex),
    Contains(String),
}

impl NameFilter {
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        let pattern_lc = pattern.to_lowercase();
        if pattern_lc.contains('*') || pattern_lc.contains('?') {
            let escaped = regex::escape(&pattern_lc);
            let regex_str = escaped.replace("\\*", ".*").replace("\\?", ".");
            let final_pattern = format!("^{}$", regex_str);
            Ok(NameFilter::Glob(Regex::new(&final_pattern)?))
        } else {
            Ok(NameFilter::Contains(pattern_lc))
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let name_lc = name.to_lowercase();
        match self {
            NameFilter::Glob(re) => re.is_match(&name_lc),
            NameFilter::Contains(s) => name_lc.contains(s),
        }
    }
}
