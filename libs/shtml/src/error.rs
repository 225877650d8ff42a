use kstring::KString;

/// Define an error type wrapper e.g. `Foo` around a
/// `Box<FooKind>`. Implements the `std::error::Error`,
/// `std::ops::Deref` and `From` traits on `Foo` to make the
/// underlying `FooKind` transparently accessible. Thanks to the
/// `From` forwarding, `thiserror`'s `#[from]` syntax still
/// works. `FooKind` has to be defined separately.
macro_rules! def_boxed_error {
    ($wrappername:ident, $kindname:ident) => {

        #[derive(Debug)]
        pub struct $wrappername(Box<$kindname>);

        impl $wrappername {
            pub fn kind(&self) -> &$kindname {
                &self.0
            }
        }

        impl std::ops::Deref for $wrappername {
            type Target = $kindname;

            fn deref(&self) -> &Self::Target {
                &*self.0
            }
        }

        impl<E> From<E> for $wrappername where $kindname: From<E> {
            fn from(err: E) -> Self {
                $wrappername(Box::new($kindname::from(err)))
            }
        }

        impl std::error::Error for $wrappername {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                std::error::Error::source(&*self.0)
            }
        }

        impl std::fmt::Display for $wrappername {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&*self.0, f)
            }
        }
    }
}

/// Defines both an error type and its box wrapper as per
/// `def_boxed_error`, deriving `thiserror::Error` on the inner type.
macro_rules! def_boxed_thiserror {
    ($wrappername:ident, pub enum $kindname:ident {$($body:tt)*}) => {
        #[derive(thiserror::Error, Debug)]
        pub enum $kindname {
            $($body)*
        }

        def_boxed_error!($wrappername, $kindname);
    }
}

def_boxed_thiserror!(ShtmlError, pub enum ShtmlErrorKind {
    /// The CSS builder was used in a way it can't handle.
    #[error("css-error: {desc}. hint: {hint}")]
    Css { desc: String, hint: String },
    #[error("unknown element \"{0}\"")]
    UnknownElement(KString),
    #[error("unknown attribute \"{0}\"")]
    UnknownAttribute(KString),
    #[error("unknown CSS property \"{0}\"")]
    UnknownCssProperty(KString),
});

pub type Result<T> = std::result::Result<T, ShtmlError>;
