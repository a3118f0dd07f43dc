use std::borrow::Cow;

use serde::Serialize;

#[derive(Serialize)]
pub struct GreetingMessage<'a> {
    message: Cow<'a, str>
}

impl<'a> GreetingMessage<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message: Cow::from(message)
        }
    }
}
