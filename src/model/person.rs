use chrono::NaiveDate;

/// An author or commenter of the blog.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// PNG bytes of the profile picture.
    pub avatar: Option<Vec<u8>>,
}

/// Payload for creating a new person.
#[derive(Debug, Clone)]
pub struct PersonCreate {
    pub name: String,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl PersonCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            job_title: None,
            birth_date: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }
}
