// Case-insensitive substring search over configurable fields
pub type FieldGetter<T> = Box<dyn Fn(&T) -> Option<String> + Send + Sync>;

pub struct SearchOptions<T> {
    pub fields: Vec<FieldGetter<T>>,
    pub case_sensitive: bool,
    pub trim: bool,
}

impl<T> SearchOptions<T> {
    pub fn new(fields: Vec<FieldGetter<T>>) -> Self {
        Self {
            fields,
            case_sensitive: false,
            trim: true,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

pub fn normalize_query(query: &str, case_sensitive: bool, trim: bool) -> String {
    let q = if trim { query.trim() } else { query };
    if case_sensitive {
        q.to_string()
    } else {
        q.to_lowercase()
    }
}

/// Items where any field contains `query`. An empty query keeps everything.
pub fn filter_by_query<'a, T>(items: &'a [T], query: &str, options: &SearchOptions<T>) -> Vec<&'a T> {
    let q = normalize_query(query, options.case_sensitive, options.trim);
    if q.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            options.fields.iter().any(|field| match field(item) {
                Some(value) if options.case_sensitive => value.contains(&q),
                Some(value) => value.to_lowercase().contains(&q),
                None => false,
            })
        })
        .collect()
}
