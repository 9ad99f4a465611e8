use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Where a value lives in `localStorage`.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalGet: Sized {
    /// Stored value, `None` when missing or unreadable.
    fn local_get() -> Option<Self>;
}

impl<T: StorageKey + DeserializeOwned> LocalGet for T {
    fn local_get() -> Option<Self> {
        match LocalStorage::get(T::KEY) {
            Ok(value) => Some(value),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log::warn!("failed to load {}: {}", T::KEY, err);
                None
            }
        }
    }
}

pub(crate) trait LocalOrDefault {
    fn local_or_default() -> Self;
}

impl<T: LocalGet + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        T::local_get().unwrap_or_default()
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("failed to save {}: {}", T::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}
