/// Declares capability tags: an uninhabited marker type per capability, sealed
/// and placed at the given [`Level`](crate::cursor::Level) of the lattice.
macro_rules! capability_tags {
    // end of recursion
    () => {};

    ($(#[$attrs:meta])* $tag:ident => $level:ident $(, $($rest:tt)*)?) => {
        $(#[$attrs])*
        #[derive(Debug)]
        pub enum $tag {}

        impl sealed::Sealed for $tag {}

        impl Tag for $tag {
            const LEVEL: Level = Level::$level;
        }

        $(capability_tags!($($rest)*);)?
    };
}

/// Generates the natural-order variant of a comparator-taking algorithm, i.e.
/// a function that forwards to its `_by` counterpart with [`Less`](crate::Less).
macro_rules! natural_order {
    (
        $(#[$attrs:meta])*
        pub fn $name:ident<$($g:ident),*>($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?
        where { $($bounds:tt)* }
        => $by:ident;
        $($rest:tt)*
    ) => {
        $(#[$attrs])*
        #[inline]
        pub fn $name<$($g),*>($($arg: $ty),*) $(-> $ret)?
        where
            $($bounds)*
        {
            $by($($arg,)* $crate::compare::Less)
        }

        natural_order!($($rest)*);
    };

    () => {};
}
