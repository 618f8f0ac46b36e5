// src/signal.rs
//
// FM synthesis from a sinc message:
//   message[i]    = sinc(fm * (t[i] - 2))
//   integrated[i] = (message[0] + .. + message[i]) / rate
//   fm[i]         = cos(2π fc t[i] + 2π integrated[i])
// Parameters are not validated; a zero rate gives inf/NaN samples.

use std::f64::consts::PI;

/// Seconds at which the message pulse peaks.
pub const MESSAGE_CENTER: f64 = 2.0;

/// Normalized sinc, `sin(πx) / (πx)` with `sinc(0) = 1`.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// `n` evenly spaced points from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SignalSample {
    pub t: f64,
    pub message_amplitude: f64,
    pub fm_amplitude: f64,
}

/// Message, running integral and FM waveform over one time axis.
/// All four vectors have the length of `time`.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    time: Vec<f64>,
    message_frequency: f64,
    carrier_frequency: f64,
    sampling_rate: u32,
    message: Vec<f64>,
    integrated: Vec<f64>,
    fm: Vec<f64>,
}

impl Signal {
    pub fn new(time: Vec<f64>, message_frequency: f64, carrier_frequency: f64, sampling_rate: u32) -> Self {
        let message: Vec<f64> = time
            .iter()
            .map(|&t| sinc(message_frequency * (t - MESSAGE_CENTER)))
            .collect();

        let rate = sampling_rate as f64;
        let integrated: Vec<f64> = message
            .iter()
            .scan(0.0, |sum, &m| {
                *sum += m;
                Some(*sum / rate)
            })
            .collect();

        let fm = time
            .iter()
            .zip(&integrated)
            .map(|(&t, &area)| (2.0 * PI * carrier_frequency * t + 2.0 * PI * area).cos())
            .collect();

        Self { time, message_frequency, carrier_frequency, sampling_rate, message, integrated, fm }
    }

    pub fn time(&self) -> &[f64] { &self.time }
    pub fn message(&self) -> &[f64] { &self.message }
    pub fn integrated(&self) -> &[f64] { &self.integrated }
    pub fn fm(&self) -> &[f64] { &self.fm }
    pub fn message_frequency(&self) -> f64 { self.message_frequency }
    pub fn carrier_frequency(&self) -> f64 { self.carrier_frequency }
    pub fn sampling_rate(&self) -> u32 { self.sampling_rate }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = SignalSample> + '_ {
        self.time
            .iter()
            .zip(&self.message)
            .zip(&self.fm)
            .map(|((&t, &message_amplitude), &fm_amplitude)| SignalSample { t, message_amplitude, fm_amplitude })
    }
}

/// Message and FM waveforms for `time`.
pub fn synthesize(
    time: &[f64],
    message_frequency: f64,
    carrier_frequency: f64,
    sampling_rate: u32,
) -> (Vec<f64>, Vec<f64>) {
    let signal = Signal::new(time.to_vec(), message_frequency, carrier_frequency, sampling_rate);
    (signal.message, signal.fm)
}
