#![no_std]

use core::{any::type_name, fmt};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Error<K, T: ?Sized> {
    pub kind: K,
    pub data: T,
}

impl<K, T> Error<K, T> {
    pub fn map_data<U>(self, f: impl FnOnce(T) -> U) -> Error<K, U> {
        Error {
            kind: self.kind,
            data: f(self.data),
        }
    }
}

impl<K: fmt::Display, T: ?Sized> fmt::Display for Error<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, type_name::<T>())
    }
}

impl<K: fmt::Debug + fmt::Display, T: fmt::Debug> core::error::Error for Error<K, T> {}

#[macro_export]
macro_rules! make_error {
    ($kind:ident => $v:vis $err:ident) => {
        $v type $err<T> = ndcraft_error::Error<$kind, T>;

        impl $kind {
            $v fn with<T>(self, data: T) -> $err<T> {
                $err { kind: self, data: data }
            }
        }
    };
}
