// Application state containers. Each wraps a watch channel so views can
// subscribe to changes and the stores can be shared behind an Arc.
pub mod filters;
pub mod toast;
pub mod ui;
pub mod watchlist;

pub use filters::ProviderFilterStore;
pub use toast::{Toast, ToastKind, ToastStore};
pub use ui::{PanelState, UiState, UiStore};
pub use watchlist::WatchlistStore;
