/// License report domain - dependency models and pure resolution rules
pub mod domain;
pub mod services;
