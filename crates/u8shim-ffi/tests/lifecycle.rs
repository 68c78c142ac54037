//! End-to-end use of the C entry points the way a foreign binding drives them.

use std::ffi::CString;

use proptest::prelude::*;
use u8shim_core::{BufferMode, Bus, Rotation, SetupType};
use u8shim_ffi::{
    clearBuffer, done, getBufferCurrTileRow, getBufferPtr, getBufferSize, getBufferTileHeight,
    getBufferTileWidth, getDisplayHeight, getDisplayWidth, init_u8g2, setBufferCurrTileRow,
    setBufferPtr, u8shim_setup, u8shim_setup_by_name, ShimStatus,
};
use u8shim_test_utils::{expected_buffer_size, KNOWN_SIZES};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn setup_tags(setup: SetupType, mode: BufferMode) -> (i32, i32, i32, i32) {
    let bus = setup.buses()[0];
    (setup as i32, bus as i32, mode as i32, Rotation::R0 as i32)
}

#[test]
fn allocate_attach_query_release() {
    init_logging();
    let h = init_u8g2();
    assert!(!h.is_null());

    let status = u8shim_setup(
        h,
        SetupType::Ssd1306Noname128x64 as i32,
        Bus::HwI2c as i32,
        BufferMode::Full as i32,
        Rotation::R0 as i32,
    );
    assert_eq!(status, ShimStatus::Ok as i32);

    let mut buf = vec![0xFFu8; 1024];
    setBufferPtr(h, buf.as_mut_ptr());
    assert_eq!(getBufferSize(h), 1024);
    assert_eq!(getBufferPtr(h), buf.as_mut_ptr());

    clearBuffer(h);
    assert!(buf.iter().all(|&b| b == 0));
    done(h);
}

#[test]
fn known_sizes_through_c_api() {
    init_logging();
    for &(setup, mode, size) in KNOWN_SIZES {
        let h = init_u8g2();
        let (s, b, m, r) = setup_tags(setup, mode);
        assert_eq!(u8shim_setup(h, s, b, m, r), ShimStatus::Ok as i32);
        assert_eq!(getBufferSize(h), size as i32, "{setup:?} {mode:?}");
        done(h);
    }
}

#[test]
fn page_window_walks_the_panel() {
    let h = init_u8g2();
    let name = CString::new("sh1106_128x64_noname").unwrap();
    assert_eq!(
        u8shim_setup_by_name(h, name.as_ptr(), Bus::HwSpi as i32, 0, 0),
        ShimStatus::Ok as i32
    );
    assert_eq!(getBufferTileWidth(h), 16);
    assert_eq!(getBufferTileHeight(h), 1);
    for row in 0..8 {
        setBufferCurrTileRow(h, row);
        assert_eq!(getBufferCurrTileRow(h), row);
        assert_eq!(getBufferSize(h), 128);
    }
    done(h);
}

#[test]
fn resetup_changes_size_but_keeps_buffer() {
    let h = init_u8g2();
    let mut buf = vec![0u8; 1024];
    setBufferPtr(h, buf.as_mut_ptr());
    assert_eq!(u8shim_setup(h, 0, 0, 2, 0), ShimStatus::Ok as i32);
    assert_eq!(getBufferSize(h), 1024);
    assert_eq!(u8shim_setup(h, 0, 0, 0, 3), ShimStatus::Ok as i32);
    assert_eq!(getBufferSize(h), 128);
    assert_eq!((getDisplayWidth(h), getDisplayHeight(h)), (64, 128));
    assert_eq!(getBufferPtr(h), buf.as_mut_ptr());
    done(h);
}

fn arb_setup() -> impl Strategy<Value = SetupType> {
    (0usize..SetupType::ALL.len()).prop_map(|i| SetupType::ALL[i])
}

fn arb_mode() -> impl Strategy<Value = BufferMode> {
    (0i32..3).prop_map(|t| BufferMode::try_from(t).unwrap())
}

proptest! {
    #[test]
    fn size_matches_derived_formula(setup in arb_setup(), mode in arb_mode()) {
        let h = init_u8g2();
        let (s, b, m, r) = setup_tags(setup, mode);
        prop_assert_eq!(u8shim_setup(h, s, b, m, r), ShimStatus::Ok as i32);
        prop_assert_eq!(getBufferSize(h) as usize, expected_buffer_size(setup, mode));
        done(h);
    }

    #[test]
    fn attaching_a_buffer_never_changes_size(setup in arb_setup(), mode in arb_mode()) {
        let h = init_u8g2();
        let (s, b, m, r) = setup_tags(setup, mode);
        prop_assert_eq!(u8shim_setup(h, s, b, m, r), ShimStatus::Ok as i32);
        let before = getBufferSize(h);
        let mut buf = vec![0u8; before as usize];
        setBufferPtr(h, buf.as_mut_ptr());
        prop_assert_eq!(getBufferSize(h), before);
        done(h);
    }
}
