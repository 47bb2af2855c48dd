#![macro_use]

macro_rules! pin_trait {
    ($signal:ident, $instance:path) => {
        #[doc = concat!(stringify!($signal), " pin trait")]
        pub trait $signal<T: $instance>: crate::gpio::Pin {
            #[doc = concat!(
                "Get the peripheral pin select code routing this pin as ",
                stringify!($signal)
            )]
            fn pps_code(&self) -> u8;
        }
    };
}

macro_rules! pin_trait_impl {
    (crate::$mod:ident::$trait:ident, $instance:ident, $pin:ident, $code:expr) => {
        impl crate::$mod::$trait<crate::peripherals::$instance> for crate::peripherals::$pin {
            fn pps_code(&self) -> u8 {
                $code
            }
        }
    };
}
