use super::*;

#[test]
fn test_stage_enum_matches_kind() {
    for kind in ShaderStageKind::ALL {
        assert_eq!(stage_enum(kind), kind.gl_enum(), "{}", kind);
    }
}

#[test]
fn test_decode_info_log_trims_terminator() {
    let buffer = b"0:1: error\n\0".to_vec();
    assert_eq!(decode_info_log(buffer, 11), "0:1: error\n");
}

#[test]
fn test_decode_info_log_clamps_written() {
    assert_eq!(decode_info_log(b"abc\0".to_vec(), 100), "abc");
    assert_eq!(decode_info_log(b"abc\0".to_vec(), -1), "");
    assert_eq!(decode_info_log(Vec::new(), 0), "");
}

#[test]
fn test_chunk_lengths_single_piece() {
    assert_eq!(chunk_lengths(42, MAX_CHUNK), vec![42]);
    assert_eq!(chunk_lengths(0, MAX_CHUNK), vec![0]);
}

#[test]
fn test_chunk_lengths_split_without_loss() {
    let lengths = chunk_lengths(10, 4);
    assert_eq!(lengths, vec![4, 4, 2]);
    assert_eq!(lengths.iter().sum::<GLint>(), 10);
    assert_eq!(chunk_lengths(8, 4), vec![4, 4]);
}
