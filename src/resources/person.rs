use crate::model::{BlogPosting, Person};
use hypermedia_framework::{BinaryFile, Representor, Result};

pub fn representor() -> Result<Representor> {
    Representor::builder::<Person>()
        .identifier(|person| person.id)
        .add_type("Person")
        .add_string("name", |person| person.name.clone())
        .add_string("email", |person| person.email.clone())
        .add_string("jobTitle", |person| person.job_title.clone())
        .add_string("birthDate", |person| {
            person
                .birth_date
                .map(|date| date.format("%Y-%m-%d").to_string())
        })
        .add_binary("image", |person| {
            person
                .avatar
                .as_ref()
                .map(|png| BinaryFile::new(png.clone(), "image/png"))
        })
        .add_related_collection::<BlogPosting, _, _>("blogPostings", |person| person.id)
        .build()
}
