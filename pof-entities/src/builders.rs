pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::address_record_builder::*;

pub mod address_record_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressRecordBuild {
        street: String,
        number: String,
        postal_code: String,
    }

    impl AddressRecordBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.street = x.into();
            self
        }
        pub fn number(mut self, x: &str) -> Self {
            self.number = x.into();
            self
        }
        pub fn postal_code(mut self, x: &str) -> Self {
            self.postal_code = x.into();
            self
        }
        pub fn finish(self) -> AddressRecord {
            AddressRecord::new(self.street, self.number, self.postal_code)
        }
    }

    impl Builder for AddressRecord {
        type Build = AddressRecordBuild;
        fn build() -> Self::Build {
            AddressRecordBuild {
                street: "Rua do Comércio".into(),
                number: "1".into(),
                postal_code: "57020-000".into(),
            }
        }
    }
}
