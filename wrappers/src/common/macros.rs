/// Generates methods that take the lock of `self.inner` and forward
/// to the method of the same name on the guarded value.
///
/// The first token picks the guard: `read` or `write`.
#[macro_export]
macro_rules! define_locked_methods {
    (
        $guard:ident;
        $(
            $(#[$doc:meta])*
            fn $name:ident(&self $(, $arg:ident: $arg_ty:ty)*) -> $ret:ty;
        )+
    ) => {
        $(
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(&self $(, $arg: $arg_ty)*) -> $ret {
                self.inner.$guard().$name($($arg),*)
            }
        )+
    };
}
