use crate::Sample;

/// Enum to hold the data store.
#[derive(Debug, PartialEq)]
enum DataStorEnum<'a, T: Sample> {
    /// A reference to a slice of data.
    Ref(&'a mut [T]),
    /// Owned data.
    Own(Vec<T>),
}

/// Backing storage of an [`crate::ImageData`]: either a borrowed caller buffer or an
/// owned vector.
#[derive(Debug, PartialEq)]
pub struct DataStor<'a, T: Sample>(DataStorEnum<'a, T>);

impl<'a, T: Sample> DataStor<'a, T> {
    /// Create a new data store borrowing a mutable slice.
    pub fn from_mut_ref(data: &'a mut [T]) -> Self {
        DataStor(DataStorEnum::Ref(data))
    }

    /// Create a new data store from owned data.
    pub fn from_owned(data: Vec<T>) -> Self {
        DataStor(DataStorEnum::Own(data))
    }

    /// Get the data as a slice.
    pub fn as_slice(&self) -> &[T] {
        match &self.0 {
            DataStorEnum::Ref(data) => data,
            DataStorEnum::Own(data) => data.as_slice(),
        }
    }

    /// Get the data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.0 {
            DataStorEnum::Ref(data) => data,
            DataStorEnum::Own(data) => data,
        }
    }

    /// Get the data as a vector, copying if borrowed.
    pub fn into_vec(self) -> Vec<T> {
        match self.0 {
            DataStorEnum::Own(data) => data,
            DataStorEnum::Ref(data) => data.to_vec(),
        }
    }

    /// Get a u8 slice of the data.
    pub fn as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Get the length of the data.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
}

impl<T: Sample> Clone for DataStor<'_, T> {
    fn clone(&self) -> Self {
        match &self.0 {
            DataStorEnum::Ref(data) => DataStor(DataStorEnum::Own(data.to_vec())),
            DataStorEnum::Own(data) => DataStor(DataStorEnum::Own(data.clone())),
        }
    }
}
