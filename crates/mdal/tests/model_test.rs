//! End-to-end tests of the mesh / dataset group / dataset model.
//!
//! Each test builds a mesh the way a driver would, then reads it back the way
//! a consumer would.

use mdal_rs::*;
use proptest::prelude::*;

/// A 3x2 grid of vertices forming two quads.
fn grid_geometry() -> MemoryGeometry {
    let vertices = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(2.0, 1.0, 0.0),
    ];
    let faces = vec![vec![0, 1, 4, 3], vec![1, 2, 5, 4]];
    MemoryGeometry::new(vertices, faces)
}

/// Populates a scalar group on vertices with one dataset per time step.
fn add_depth_group(mesh: &mut Mesh, steps: usize) -> Result<()> {
    let mut group = DatasetGroup::with_name("memory", mesh, "grid.dat", "depth");
    group.set_metadata("units", "m");
    group.set_reference_time("2024-03-01T00:00:00");
    let group = mesh.add_dataset_group(group)?;

    group.start_editing();
    for step in 0..steps {
        let mut dataset = MemoryDataset2D::new(group, false);
        for (i, value) in dataset.values_mut().iter_mut().enumerate() {
            *value = (step * 10 + i) as f64;
        }
        dataset.set_time(step as f64 * 0.25);
        dataset.set_statistics(Statistics::new(
            (step * 10) as f64,
            (step * 10 + 5) as f64,
        ));
        dataset.set_is_valid(true);
        group.add_dataset(Box::new(dataset))?;
    }
    group.set_statistics(Statistics::new(0.0, ((steps - 1) * 10 + 5) as f64));
    group.stop_editing();
    Ok(())
}

#[test]
fn consumer_traversal() {
    init_logging();
    let mut mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
    mesh.set_source_crs_from_epsg(4326);
    add_depth_group(&mut mesh, 3).unwrap();

    assert_eq!(mesh.crs(), "EPSG:4326");
    assert_eq!(mesh.extent(), BBox::new(0.0, 2.0, 0.0, 1.0));

    let group = mesh.group("depth").expect("depth group");
    assert_eq!(group.get_metadata("units"), "m");
    assert_eq!(group.reference_time(), "2024-03-01T00:00:00");
    assert!(!group.is_in_edit_mode());
    assert_eq!(group.statistics(), Statistics::new(0.0, 25.0));
    assert_eq!(group.datasets_count(), 3);

    for (step, dataset) in group.datasets().enumerate() {
        assert!(dataset.is_valid());
        assert_eq!(dataset.time(), step as f64 * 0.25);
        assert_eq!(dataset.values_count(), 6);
        assert_eq!(dataset.driver_name(), "memory");
        assert_eq!(dataset.mesh().uri(), "grid.2dm");
        let values = read_doubles(dataset, DataType::ScalarDouble, 4).unwrap();
        let expected: Vec<f64> = (0..6).map(|i| (step * 10 + i) as f64).collect();
        assert_eq!(values, expected);
    }
}

#[test]
fn vector_group_on_faces_with_active_flags() {
    let mut mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
    let mut group = DatasetGroup::with_name("memory", &mesh, "grid.dat", "velocity");
    group.set_data_location(DataLocation::OnFaces).unwrap();
    group.set_is_scalar(false).unwrap();
    let group = mesh.add_dataset_group(group).unwrap();

    let mut dataset = MemoryDataset2D::new(group, true);
    dataset.set_vector_value(0, 1.0, 2.0);
    dataset.set_vector_value(1, -1.0, 0.5);
    dataset.set_active(1, false);
    group.add_dataset(Box::new(dataset)).unwrap();

    let dataset = mesh.group("velocity").unwrap().dataset(0).unwrap();
    assert_eq!(dataset.values_count(), 2);
    assert_eq!(
        read_doubles(dataset, DataType::Vector2dDouble, DEFAULT_CHUNK_SIZE).unwrap(),
        vec![1.0, 2.0, -1.0, 0.5]
    );
    assert_eq!(
        read_integers(dataset, DataType::ActiveInteger, 1).unwrap(),
        vec![1, 0]
    );
    assert!(matches!(
        read_doubles(dataset, DataType::ScalarDouble, 8),
        Err(MdalError::IncompatibleDataset(_))
    ));
    assert!(matches!(
        read_doubles(dataset, DataType::ActiveInteger, 8),
        Err(MdalError::IncompatibleDataset(_))
    ));
}

#[test]
fn stacked_volumes() {
    let mut mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
    let mut group = DatasetGroup::with_name("memory", &mesh, "grid.nc", "temperature");
    group.set_data_location(DataLocation::OnVolumes).unwrap();
    let group = mesh.add_dataset_group(group).unwrap();

    let mut dataset =
        MemoryDataset3D::new(group, vec![2, 3], vec![0.0, -1.0, -2.0, 0.0, -1.0, -2.0, -3.0]).unwrap();
    for (i, value) in dataset.values_mut().iter_mut().enumerate() {
        *value = 10.0 + i as f64;
    }
    dataset.set_is_valid(true);
    group.add_dataset(Box::new(dataset)).unwrap();

    let dataset = mesh.group("temperature").unwrap().dataset(0).unwrap();
    assert_eq!(dataset.values_count(), 5);
    assert_eq!(
        read_doubles(dataset, DataType::ScalarVolumesDouble, 2).unwrap(),
        vec![10.0, 11.0, 12.0, 13.0, 14.0]
    );
    assert_eq!(
        read_integers(dataset, DataType::VerticalLevelCountInteger, 8).unwrap(),
        vec![2, 3]
    );
    assert_eq!(
        read_integers(dataset, DataType::FaceIndexForVolumeIndexInteger, 8).unwrap(),
        vec![0, 2]
    );
    assert_eq!(
        read_doubles(dataset, DataType::VerticalLevelDouble, 3).unwrap().len(),
        7
    );
    assert!(matches!(
        read_doubles(dataset, DataType::ScalarDouble, 8),
        Err(MdalError::IncompatibleDataset(_))
    ));
}

#[test]
fn values_count_examples() {
    // faces group: mesh face count regardless of volumes
    let mut mesh = Mesh::new("test", 100, 40, 4, BBox::default(), "mesh");
    let mut faces = DatasetGroup::with_name("test", &mesh, "", "faces");
    faces.set_data_location(DataLocation::OnFaces).unwrap();
    let faces = mesh.add_dataset_group(faces).unwrap();
    let dataset = Dataset2D::new(faces);
    faces.add_dataset(Box::new(dataset)).unwrap();

    // volumes group: the dataset's own volume count
    let mut volumes = DatasetGroup::with_name("test", &mesh, "", "volumes");
    volumes.set_data_location(DataLocation::OnVolumes).unwrap();
    let volumes = mesh.add_dataset_group(volumes).unwrap();
    let mut dataset = Dataset2D::new(volumes);
    dataset.set_volumes_count(17);
    volumes.add_dataset(Box::new(dataset)).unwrap();

    let face_dataset = mesh.group("faces").unwrap().dataset(0).unwrap();
    assert_eq!(face_dataset.values_count(), 40);
    let volume_dataset = mesh.group("volumes").unwrap().dataset(0).unwrap();
    assert_eq!(volume_dataset.values_count(), 17);

    // placeholders never fabricate data
    let mut buffer = [0.0; 8];
    assert_eq!(
        face_dataset
            .data(DataType::ScalarDouble, 0, DataBuffer::Double(&mut buffer))
            .unwrap(),
        0
    );
}

#[test]
fn shape_is_frozen_once_datasets_exist() {
    let mut mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
    add_depth_group(&mut mesh, 1).unwrap();

    let group = mesh.group_mut("depth").unwrap();
    assert!(matches!(
        group.set_data_location(DataLocation::OnFaces),
        Err(MdalError::DatasetsExist { count: 1, .. })
    ));
    assert!(matches!(
        group.set_is_scalar(false),
        Err(MdalError::DatasetsExist { .. })
    ));
    assert_eq!(group.data_location(), DataLocation::OnVertices);
    assert!(group.is_scalar());

    // metadata and edit mode stay editable
    group.set_name("water depth");
    group.start_editing();
    assert!(mesh.group("depth").is_none());
    assert!(mesh.group("water depth").unwrap().is_in_edit_mode());
}

#[test]
fn edit_mode_round_trip() {
    let mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
    let mut group = DatasetGroup::new("memory", &mesh, "");
    assert!(!group.is_in_edit_mode());
    group.start_editing();
    assert!(group.is_in_edit_mode());
    group.stop_editing();
    assert!(!group.is_in_edit_mode());
    group.start_editing();
    group.stop_editing();
    assert!(!group.is_in_edit_mode());
}

#[test]
fn children_cannot_change_parent() {
    let mut first = grid_geometry().into_mesh("memory", "first.2dm").unwrap();
    let second = grid_geometry().into_mesh("memory", "second.2dm").unwrap();

    let stray = DatasetGroup::with_name("memory", &second, "", "depth");
    assert!(matches!(
        first.add_dataset_group(stray),
        Err(MdalError::ForeignGroup(_))
    ));

    let group = DatasetGroup::with_name("memory", &first, "", "depth");
    let other = DatasetGroup::with_name("memory", &first, "", "other");
    let group = first.add_dataset_group(group).unwrap();
    let dataset = MemoryDataset2D::new(&other, false);
    assert!(matches!(
        group.add_dataset(Box::new(dataset)),
        Err(MdalError::ForeignDataset(_))
    ));
    assert_eq!(first.dataset_groups_count(), 1);
    assert_eq!(first.group("depth").unwrap().datasets_count(), 0);
}

#[test]
fn dataset_shaped_before_reshape_is_refused() {
    let mut mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
    let group = DatasetGroup::with_name("memory", &mesh, "grid.dat", "depth");
    let group = mesh.add_dataset_group(group).unwrap();

    let mut on_vertices = MemoryDataset2D::new(group, false);
    for (i, value) in on_vertices.values_mut().iter_mut().enumerate() {
        *value = 10.0 + i as f64;
    }
    group.set_data_location(DataLocation::OnFaces).unwrap();
    assert!(matches!(
        group.add_dataset(Box::new(on_vertices)),
        Err(MdalError::StaleDataset(_))
    ));

    let scalar = MemoryDataset2D::new(group, false);
    group.set_is_scalar(false).unwrap();
    assert!(matches!(
        group.add_dataset(Box::new(scalar)),
        Err(MdalError::StaleDataset(_))
    ));

    let mut on_faces = MemoryDataset2D::new(group, false);
    on_faces.set_vector_value(1, 3.0, 4.0);
    group.add_dataset(Box::new(on_faces)).unwrap();

    let dataset = mesh.group("depth").unwrap().dataset(0).unwrap();
    assert_eq!(dataset.values_count(), 2);
    assert_eq!(
        read_doubles(dataset, DataType::Vector2dDouble, DEFAULT_CHUNK_SIZE).unwrap(),
        vec![0.0, 0.0, 3.0, 4.0]
    );
}

#[test]
fn geometry_cursors_through_mesh() {
    let mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
    assert_eq!(mesh.face_vertices_maximum_count(), 4);

    let mut cursor = mesh.read_vertices().unwrap();
    let mut coordinates = vec![0.0; 3 * 4];
    let mut read = 0;
    loop {
        let count = cursor.next_vertices(&mut coordinates);
        if count == 0 {
            break;
        }
        read += count;
    }
    assert_eq!(read, mesh.vertices_count());

    let mut cursor = mesh.read_faces().unwrap();
    let mut offsets = vec![0; 8];
    let mut indices = vec![0; 8];
    assert_eq!(cursor.next_faces(&mut offsets, &mut indices), 2);
    assert_eq!(&offsets[..2], &[4, 8]);
    assert_eq!(indices, vec![0, 1, 4, 3, 1, 2, 5, 4]);
}

#[test]
fn info_json_lists_groups() {
    let mut mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
    add_depth_group(&mut mesh, 2).unwrap();

    let info = mesh.info();
    let json = info.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["driver_name"], "memory");
    assert_eq!(value["topology"]["faces_count"], 2);
    assert_eq!(value["groups"][0]["name"], "depth");
    assert_eq!(value["groups"][0]["datasets"][1]["values_count"], 6);
    assert_eq!(MeshInfo::from_json(&json).unwrap(), info);
}

proptest! {
    #[test]
    fn chunk_size_does_not_change_result(chunk_size in 0usize..16, steps in 1usize..4) {
        let mut mesh = grid_geometry().into_mesh("memory", "grid.2dm").unwrap();
        add_depth_group(&mut mesh, steps).unwrap();
        let group = mesh.group("depth").unwrap();
        let last = group.dataset(steps - 1).unwrap();

        let chunked = read_doubles(last, DataType::ScalarDouble, chunk_size).unwrap();
        let whole = read_doubles(last, DataType::ScalarDouble, DEFAULT_CHUNK_SIZE).unwrap();
        prop_assert_eq!(chunked.len(), last.values_count());
        prop_assert_eq!(chunked, whole);
    }
}
