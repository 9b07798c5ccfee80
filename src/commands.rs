mod fetch;

pub(crate) use fetch::Fetch;
