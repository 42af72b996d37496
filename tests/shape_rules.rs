use xdmf_write::{is_correct_shape, Container, ElementType, Error};

/// (shape, element types the shape is valid for)
const TRUTH_TABLE: &[(&[usize], &[ElementType])] = &[
    (&[], &[]),
    (&[10], &[ElementType::Polyvertex]),
    (&[10, 1], &[]),
    (&[10, 2], &[]),
    (&[10, 3], &[ElementType::Triangle]),
    (&[10, 4], &[ElementType::Quadrilateral]),
    (&[10, 8], &[ElementType::Hexahedron]),
    (&[10, 3, 1], &[]),
    (&[10, 4, 2], &[]),
    (&[10, 8, 8], &[]),
];

#[test]
fn shape_truth_table() {
    for (shape, valid) in TRUTH_TABLE {
        for element in ElementType::ALL {
            assert_eq!(
                is_correct_shape(shape, element),
                valid.contains(&element),
                "shape {shape:?} as {element}"
            );
        }
    }
}

#[test]
fn topology_follows_truth_table() {
    let mut file = Container::new("tmp.h5");
    for (i, (shape, _)) in TRUTH_TABLE.iter().enumerate() {
        file.insert(format!("/conn/{i}"), *shape);
    }

    for (i, (_, valid)) in TRUTH_TABLE.iter().enumerate() {
        for element in ElementType::ALL {
            let dataset = file.dataset(&format!("/conn/{i}")).unwrap();
            let result = xdmf_write::topology(dataset, element);

            if valid.contains(&element) {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(Error::IncorrectShape { .. })));
            }
        }
    }
}
