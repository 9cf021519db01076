use crate::api::{Page, Subject, TextBook};

pub fn build_url(origin: &str, sort: &str, page: u32) -> String {
    format!(
        "{}/search?sort={}&page={}",
        origin.trim_end_matches('/'),
        sort,
        page
    )
}

/// Number of requests needed to read every page, the first one included.
pub fn requests_to_make(first: &Page) -> u32 {
    first.total_pages.max(1)
}

/// Whether the subjects actually fetched add up to the count the first page declared.
pub fn count_matches(first: &Page, fetched: usize) -> bool {
    first.total_count as usize == fetched
}

pub fn join_names(subjects: &[Subject]) -> String {
    subjects
        .iter()
        .map(|subject| subject.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn join_titles(books: &[TextBook]) -> String {
    books
        .iter()
        .map(|book| book.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod test {
    use crate::api::{Page, Subject, TextBook};
    use crate::utils::{build_url, count_matches, join_names, join_titles, requests_to_make};

    fn page(total_pages: u32) -> Page {
        counted(total_pages, 0)
    }

    fn counted(total_pages: u32, total_count: u32) -> Page {
        Page {
            page: 1,
            page_size: 20,
            total_count,
            total_pages,
            subjects: Vec::new(),
        }
    }

    #[test]
    pub fn test_build_url() {
        let expected = "https://api.syllabus.zen.ac.jp/search?sort=code-asc&page=3";
        assert_eq!(
            expected,
            build_url("https://api.syllabus.zen.ac.jp", "code-asc", 3)
        );
        assert_eq!(
            expected,
            build_url("https://api.syllabus.zen.ac.jp/", "code-asc", 3)
        );
    }

    #[test]
    pub fn test_requests_to_make() {
        assert_eq!(1, requests_to_make(&page(0)));
        assert_eq!(1, requests_to_make(&page(1)));
        assert_eq!(34, requests_to_make(&page(34)));
    }

    #[test]
    pub fn test_count_matches() {
        assert!(count_matches(&counted(3, 45), 45));
        assert!(count_matches(&counted(1, 0), 0));
    }

    #[test]
    pub fn test_count_mismatch() {
        assert!(!count_matches(&counted(2, 10), 2));
        assert!(!count_matches(&counted(2, 1), 2));
    }

    #[test]
    pub fn test_join_names() {
        let subjects = vec![
            Subject {
                name: "線形代数".to_string(),
                ..Default::default()
            },
            Subject {
                name: "微分積分".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!("線形代数, 微分積分", join_names(&subjects));
        assert_eq!("", join_names(&[]));
    }

    #[test]
    pub fn test_join_titles() {
        let books = vec![TextBook {
            title: "プログラミング入門".to_string(),
        }];
        assert_eq!("プログラミング入門", join_titles(&books));
    }
}
