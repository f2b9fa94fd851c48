use std::io::{Cursor, Seek, SeekFrom};
use std::time::Duration;

use crate::audio::SampleFormat;
use crate::error::{FormatError, WavError};
use crate::streaming::{SampleSource, WaveStream};
use crate::testing::WavFixture;

fn collect<R: std::io::Read + Seek>(stream: &mut WaveStream<R>) -> Vec<f32> {
    let mut out = Vec::new();
    while let Some(sample) = stream.next_sample().unwrap() {
        out.push(sample);
    }
    out
}

#[test]
fn test_uint8_mono_end_to_end() {
    let mut stream = WaveStream::new(
        WavFixture::pcm(1, 8000, 8)
            .data(vec![0x00, 0xFF, 0x80])
            .cursor(),
    )
    .unwrap();

    assert_eq!(stream.frame_rate(), 8000);
    assert_eq!(stream.channel_count(), 1);
    assert_eq!(stream.frame_count(), 3);
    assert_eq!(stream.sample_format(), SampleFormat::UInt8);

    assert_eq!(stream.next_sample().unwrap(), Some(-1.0));
    assert_eq!(stream.next_sample().unwrap(), Some(1.0));
    let last = stream.next_sample().unwrap().unwrap();
    assert!((last - 0.0039).abs() < 1e-4, "got {last}");
    assert_eq!(stream.next_sample().unwrap(), None);
    assert_eq!(stream.next_sample().unwrap(), None);
}

#[test]
fn test_float32_half_is_unchanged() {
    let mut stream = WaveStream::new(WavFixture::float32(1, 44100).data_f32(&[0.5]).cursor())
        .unwrap();

    assert_eq!(stream.sample_format(), SampleFormat::Float32);
    assert_eq!(stream.next_sample().unwrap(), Some(0.5));
    assert_eq!(stream.next_sample().unwrap(), None);
}

#[test]
fn test_int24_stereo_interleaving() {
    let payload = vec![
        0xFF, 0xFF, 0x7F, // L: max
        0x00, 0x00, 0x80, // R: min
        0x00, 0x00, 0x80, // L: min
        0xFF, 0xFF, 0x7F, // R: max
    ];
    let mut stream =
        WaveStream::new(WavFixture::pcm(2, 96000, 24).data(payload).cursor()).unwrap();

    assert_eq!(stream.frame_count(), 2);
    assert_eq!(stream.bits_per_sample(), 24);
    assert_eq!(collect(&mut stream), vec![1.0, -1.0, -1.0, 1.0]);
}

#[test]
fn test_int16_with_metadata_chunks() {
    let mut list = b"INFO".to_vec();
    list.extend_from_slice(b"ISFT\x05\x00\x00\x00Test\x00");
    let fixture = WavFixture::pcm(1, 44100, 16)
        .chunk(*b"LIST", list)
        .chunk(*b"fact", 4u32.to_le_bytes().to_vec())
        .data_i16(&[i16::MIN, 0, i16::MAX]);

    let mut stream = WaveStream::new(fixture.cursor()).unwrap();
    let samples = collect(&mut stream);

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0], -1.0);
    assert!(samples[1].abs() < 1e-4);
    assert_eq!(samples[2], 1.0);
}

#[test]
fn test_twelve_bit_pcm_uses_int16_container() {
    let stream =
        WaveStream::new(WavFixture::pcm(1, 8000, 12).data_i16(&[0x7FF0]).cursor()).unwrap();
    assert_eq!(stream.sample_format(), SampleFormat::Int16);
    assert_eq!(stream.bits_per_sample(), 12);
}

#[test]
fn test_counter_matches_frame_count() {
    let fixture = WavFixture::pcm(2, 22050, 16).data_i16(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let mut stream = WaveStream::new(fixture.cursor()).unwrap();

    let initial = stream.remaining_samples();
    assert_eq!(initial, stream.frame_count() * u64::from(stream.channel_count()));
    assert_eq!(stream.total_samples(), initial);

    let mut decoded = 0;
    while stream.next_sample().unwrap().is_some() {
        decoded += 1;
        assert_eq!(stream.remaining_samples(), initial - decoded);
    }
    assert_eq!(decoded, initial);
}

#[test]
fn test_truncated_data_fails_mid_stream() {
    // Declares 8 bytes but only 3 are present
    let fixture = WavFixture::pcm(1, 8000, 16).chunk_with_size(*b"data", 8, vec![0x00, 0x40, 0x11]);
    let mut stream = WaveStream::new(fixture.cursor()).unwrap();

    assert_eq!(stream.remaining_samples(), 4);
    assert!(stream.next_sample().unwrap().is_some());
    let err = stream.next_sample().unwrap_err();
    assert!(err.is_unexpected_eof());
}

#[test]
fn test_malformed_header_yields_no_stream() {
    let result = WaveStream::new(WavFixture::pcm(1, 8000, 8).signature(*b"RIFX").cursor());
    assert!(matches!(
        result,
        Err(WavError::Format(FormatError::InvalidSignature(_)))
    ));
}

#[test]
fn test_iterator() {
    let stream = WaveStream::new(
        WavFixture::float32(2, 48000)
            .data_f32(&[0.1, 0.2, 0.3, 0.4])
            .cursor(),
    )
    .unwrap();

    assert_eq!(stream.size_hint(), (4, Some(4)));
    let samples: Result<Vec<f32>, WavError> = stream.collect();
    assert_eq!(samples.unwrap(), vec![0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn test_read_samples_in_blocks() {
    let mut stream = WaveStream::new(
        WavFixture::pcm(1, 8000, 8)
            .data(vec![0x00, 0xFF, 0x00, 0xFF, 0x00])
            .cursor(),
    )
    .unwrap();

    let mut buffer = [0.0f32; 2];
    assert_eq!(stream.read_samples(&mut buffer).unwrap(), 2);
    assert_eq!(buffer, [-1.0, 1.0]);
    assert_eq!(stream.read_samples(&mut buffer).unwrap(), 2);
    assert_eq!(stream.read_samples(&mut buffer).unwrap(), 1);
    assert_eq!(buffer[0], -1.0);
    assert_eq!(stream.read_samples(&mut buffer).unwrap(), 0);
}

#[test]
fn test_source_position_and_duration() {
    let mut stream =
        WaveStream::new(WavFixture::pcm(2, 4, 8).data(vec![0x80; 16]).cursor()).unwrap();

    assert_eq!(SampleSource::duration(&stream), Some(Duration::from_secs(2)));
    assert_eq!(stream.duration(), Duration::from_secs(2));
    assert_eq!(SampleSource::position(&stream), Duration::ZERO);

    // Two frames of a 4 Hz stream
    for _ in 0..4 {
        stream.next_sample().unwrap();
    }
    assert_eq!(SampleSource::position(&stream), Duration::from_millis(500));
    assert_eq!(SampleSource::spec(&stream), *stream.spec());
}

#[test]
fn test_into_inner_returns_positioned_source() {
    let mut stream = WaveStream::new(
        WavFixture::pcm(1, 8000, 16)
            .data_i16(&[1, 2])
            .chunk(*b"junk", vec![0; 2])
            .cursor(),
    )
    .unwrap();
    stream.next_sample().unwrap();

    let mut inner: Cursor<Vec<u8>> = stream.into_inner();
    assert_eq!(inner.stream_position().unwrap(), 46);
    assert_eq!(inner.seek(SeekFrom::End(0)).unwrap(), 58);
}

#[test]
fn test_stream_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<WaveStream<Cursor<Vec<u8>>>>();
}
