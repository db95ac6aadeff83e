//! Zero-filled buffers built from introspected spaces.

use obskit_core::{ObsDtype, ObsKey};
use obskit_obs::{dict_to_obs, zeros_from_info, Observation};
use obskit_space::obs_space_info;
use obskit_test_utils::fixtures::{mixed_dict_space, position_velocity_space, vector_space};

#[test]
fn dict_space_buffers_follow_field_order() {
    let info = obs_space_info(&position_velocity_space()).unwrap();
    let buf = zeros_from_info(&info);
    let keys: Vec<&ObsKey> = buf.keys().collect();
    assert_eq!(
        keys,
        [&ObsKey::field("position"), &ObsKey::field("velocity")]
    );
    for array in buf.values() {
        assert_eq!(array.shape(), &[3]);
        assert_eq!(array.as_f32(), Some(&[0.0f32; 3][..]));
    }
}

#[test]
fn mixed_space_buffers_carry_dtypes() {
    let info = obs_space_info(&mixed_dict_space()).unwrap();
    let buf = zeros_from_info(&info);
    assert_eq!(buf[&ObsKey::field("image")].dtype(), ObsDtype::U8);
    assert_eq!(buf[&ObsKey::field("image")].len(), 8 * 8 * 3);
    assert_eq!(buf[&ObsKey::field("mode")].shape(), &[] as &[usize]);
    assert_eq!(buf[&ObsKey::field("mode")].len(), 1);
    assert_eq!(buf[&ObsKey::field("buttons")].dtype(), ObsDtype::I8);
}

#[test]
fn leaf_space_buffer_collapses_to_bare_array() {
    let info = obs_space_info(&vector_space(&[4])).unwrap();
    match dict_to_obs(zeros_from_info(&info)) {
        Observation::Single(array) => {
            assert_eq!(array.shape(), &[4]);
            assert_eq!(array.dtype(), ObsDtype::F32);
        }
        other => panic!("expected a bare array, got {other:?}"),
    }
}
