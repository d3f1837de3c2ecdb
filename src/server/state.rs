use crate::location::SuggestionResolver;

pub struct AppState {
    pub resolver: SuggestionResolver,
}
