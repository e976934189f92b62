macro_rules! log_parse {
    ($err:expr) => {{
        #[cfg(feature = "log")]
        tracing::info!(
            "received malformed {}: {:?}",
            core::any::type_name_of_val(&$err.data),
            $err.kind
        );
        #[cfg(not(feature = "log"))]
        let _ = &$err;
    }};
}

macro_rules! log_build {
    ($err:expr) => {{
        #[cfg(feature = "log")]
        tracing::info!(
            "failed to build packet {}: {:?}",
            core::any::type_name_of_val(&$err.data),
            $err.kind
        );
        #[cfg(not(feature = "log"))]
        let _ = &$err;
    }};
}

/// Expose the message header's accessors directly on a composite packet.
///
/// Getters forward to [`Packet::message`], setters to
/// [`Packet::message_mut`]; names and signatures are kept as-is.
///
/// [`Packet::message`]: crate::Packet::message
/// [`Packet::message_mut`]: crate::Packet::message_mut
macro_rules! forward {
    (impl $packet:ty {
        get {
            $(
                $(#[$get_attr:meta])*
                fn $get:ident(&self) -> $get_ty:ty;
            )*
        }
        set {
            $(
                $(#[$set_attr:meta])*
                fn $set:ident $(<$lt:lifetime>)? (&mut self, $arg:ident: $arg_ty:ty) $(-> $set_ty:ty)?;
            )*
        }
    }) => {
        impl $packet {
            $(
                $(#[$get_attr])*
                pub fn $get(&self) -> $get_ty {
                    self.message().$get()
                }
            )*

            $(
                $(#[$set_attr])*
                pub fn $set $(<$lt>)? (&mut self, $arg: $arg_ty) $(-> $set_ty)? {
                    self.message_mut().$set($arg)
                }
            )*
        }
    };
}
