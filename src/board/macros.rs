/// Generates the tagged device enum a board stores.
///
/// For every `Variant(Type)` this emits the enum variant, a `From<Type>`
/// impl, typed accessors (`as_variant`, `as_variant_mut`, `is_variant`,
/// snake-cased) and a [`Device`](crate::board::Device) impl that forwards
/// each call to the wrapped device.
macro_rules! board_devices {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        paste::paste! {
            $(#[$meta])*
            $vis enum $name {
                $(
                    #[doc = "Wraps a `" $variant "` device."]
                    $variant($ty),
                )+
            }

            impl $name {
                $(
                    #[doc = "Returns the inner `" $variant "` if this is one."]
                    #[inline]
                    #[allow(unreachable_patterns)]
                    pub fn [<as_ $variant:snake>](&self) -> Option<&$ty> {
                        match self {
                            Self::$variant(device) => Some(device),
                            _ => None,
                        }
                    }

                    #[doc = "Returns the inner `" $variant "` mutably if this is one."]
                    #[inline]
                    #[allow(unreachable_patterns)]
                    pub fn [<as_ $variant:snake _mut>](&mut self) -> Option<&mut $ty> {
                        match self {
                            Self::$variant(device) => Some(device),
                            _ => None,
                        }
                    }

                    #[doc = "Returns true if this wraps a `" $variant "`."]
                    #[inline]
                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }
                )+
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(device: $ty) -> Self {
                    Self::$variant(device)
                }
            }
        )+

        impl $crate::board::Device for $name {
            fn initialize(&mut self) -> Result<(), $crate::board::DeviceError> {
                match self {
                    $(Self::$variant(device) => $crate::board::Device::initialize(device),)+
                }
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant(device) => $crate::board::Device::name(device),)+
                }
            }

            fn size(&self) -> usize {
                match self {
                    $(Self::$variant(device) => $crate::board::Device::size(device),)+
                }
            }

            fn read(&self, offset: u32) -> Result<u64, $crate::board::DeviceError> {
                match self {
                    $(Self::$variant(device) => $crate::board::Device::read(device, offset),)+
                }
            }

            fn write(&mut self, offset: u32, value: u64) -> Result<(), $crate::board::DeviceError> {
                match self {
                    $(Self::$variant(device) => $crate::board::Device::write(device, offset, value),)+
                }
            }
        }
    };
}

pub(super) use board_devices;
