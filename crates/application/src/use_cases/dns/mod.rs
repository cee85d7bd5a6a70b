mod answer_query;
mod lookup_domain;

pub use answer_query::AnswerQueryUseCase;
pub use lookup_domain::LookupDomainUseCase;
