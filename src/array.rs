//! helpers for preparing arrays before they are stored in the container

use crate::Error;

use ndarray::{s, Array2, ArrayView2};
use num_traits::Zero;

/// Return a list of vectors as a list of 3D vectors, as ParaView requires
/// for vector attributes.
///
/// An `[N, d]` array with `d <= 3` is copied into an `[N, 3]` array whose
/// trailing columns are zero.
///
/// ```
/// let disp = ndarray::array![[0.1, 0.0], [0.2, 0.0]];
/// let disp = xdmf_write::as3d(disp.view()).unwrap();
///
/// assert_eq!(disp, ndarray::array![[0.1, 0.0, 0.0], [0.2, 0.0, 0.0]]);
/// ```
pub fn as3d<A>(arg: ArrayView2<'_, A>) -> Result<Array2<A>, Error>
where
    A: Clone + Zero,
{
    let (rows, columns) = arg.dim();

    if columns > 3 {
        return Err(Error::TooManyComponents { columns });
    }

    if columns == 3 {
        return Ok(arg.to_owned());
    }

    let mut ret = Array2::zeros((rows, 3));
    ret.slice_mut(s![.., ..columns]).assign(&arg);

    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn pads_with_zeros() {
        let arg = array![[1, 2], [3, 4], [5, 6]];
        let out = as3d(arg.view()).unwrap();

        assert_eq!(out, array![[1, 2, 0], [3, 4, 0], [5, 6, 0]]);
    }

    #[test]
    fn three_columns_unchanged() {
        let arg = array![[1.0, 2.0, 3.0]];
        assert_eq!(as3d(arg.view()).unwrap(), arg);
    }

    #[test]
    fn single_column() {
        let arg = array![[1.5], [2.5]];
        assert_eq!(
            as3d(arg.view()).unwrap(),
            array![[1.5, 0.0, 0.0], [2.5, 0.0, 0.0]]
        );
    }

    #[test]
    fn too_many_columns() {
        let arg = Array2::<f64>::zeros((4, 4));
        let err = as3d(arg.view()).unwrap_err();

        assert!(matches!(err, Error::TooManyComponents { columns: 4 }));
    }
}
