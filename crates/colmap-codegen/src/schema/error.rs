/// Collects every error found while parsing a record so they are all
/// reported at once.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    /// Records the error of `result`, if any, and returns its value.
    pub(crate) fn check<T>(&mut self, result: syn::Result<T>) -> Option<T> {
        result.map_err(|err| self.push(err)).ok()
    }

    pub(crate) fn collect(self) -> Option<syn::Error> {
        self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        })
    }

    /// `Ok(value)` if no errors were recorded.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.collect() {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
