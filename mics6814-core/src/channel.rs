//! Sensing channels, gas species and per-channel storage
//!
//! The MICS-6814 has exactly three sensing elements. Everything keyed by
//! channel (pins, baselines, calibration windows) lives in a [`ChannelMap`],
//! which is indexed by an exhaustive `match`. There is no "unknown channel"
//! case to fall through to.

use core::fmt;

/// One of the three physical sensing elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Reducing element, CO channel
    Co,
    /// Oxidising element, NO2 channel
    No2,
    /// NH3 element
    Nh3,
}

impl Channel {
    /// All channels in the order the hardware is polled during calibration
    pub const ALL: [Channel; 3] = [Channel::Nh3, Channel::Co, Channel::No2];

    /// Gas species measured on this channel
    pub const fn gas(self) -> Gas {
        match self {
            Channel::Co => Gas::Co,
            Channel::No2 => Gas::No2,
            Channel::Nh3 => Gas::Nh3,
        }
    }

    /// Short label used in logs and error messages
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Co => "CO",
            Channel::No2 => "NO2",
            Channel::Nh3 => "NH3",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gas species with a concentration curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gas {
    /// Carbon monoxide
    Co,
    /// Nitrogen dioxide
    No2,
    /// Ammonia
    Nh3,
}

impl Gas {
    /// All supported species
    pub const ALL: [Gas; 3] = [Gas::Co, Gas::No2, Gas::Nh3];

    /// Resistance channel that senses this gas
    pub const fn channel(self) -> Channel {
        match self {
            Gas::Co => Channel::Co,
            Gas::No2 => Channel::No2,
            Gas::Nh3 => Channel::Nh3,
        }
    }

    /// Chemical formula
    pub const fn formula(self) -> &'static str {
        self.channel().name()
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}

/// One value per channel
///
/// Used for pin assignments, baselines, per-tick readings and stability
/// flags. Fields are public so callers can build and destructure it freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMap<T> {
    /// CO channel value
    pub co: T,
    /// NO2 channel value
    pub no2: T,
    /// NH3 channel value
    pub nh3: T,
}

/// Clean-air baseline resistance per channel, in ADC counts
///
/// Plain data: persist it however you like and hand it back through
/// [`Mics6814::load_calibration_data`](crate::Mics6814::load_calibration_data).
pub type Baselines = ChannelMap<u16>;

impl<T> ChannelMap<T> {
    /// Build from explicit per-channel values
    pub const fn new(co: T, no2: T, nh3: T) -> Self {
        Self { co, no2, nh3 }
    }

    /// Build by evaluating `f` once per channel, in [`Channel::ALL`] order
    pub fn from_fn(mut f: impl FnMut(Channel) -> T) -> Self {
        let nh3 = f(Channel::Nh3);
        let co = f(Channel::Co);
        let no2 = f(Channel::No2);
        Self { co, no2, nh3 }
    }

    /// Value for `channel`
    pub fn get(&self, channel: Channel) -> &T {
        match channel {
            Channel::Co => &self.co,
            Channel::No2 => &self.no2,
            Channel::Nh3 => &self.nh3,
        }
    }

    /// Mutable value for `channel`
    pub fn get_mut(&mut self, channel: Channel) -> &mut T {
        match channel {
            Channel::Co => &mut self.co,
            Channel::No2 => &mut self.no2,
            Channel::Nh3 => &mut self.nh3,
        }
    }

    /// Replace the value for `channel`
    pub fn set(&mut self, channel: Channel, value: T) {
        *self.get_mut(channel) = value;
    }

    /// Transform every value, keeping the channel association
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ChannelMap<U> {
        let nh3 = f(self.nh3);
        let co = f(self.co);
        let no2 = f(self.no2);
        ChannelMap { co, no2, nh3 }
    }

    /// Iterate `(channel, value)` pairs in [`Channel::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &T)> + '_ {
        Channel::ALL.into_iter().map(move |channel| (channel, self.get(channel)))
    }

    /// True when `predicate` holds for every channel
    pub fn all(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.iter().all(|(_, value)| predicate(value))
    }
}

impl<T: Copy> ChannelMap<T> {
    /// Same value on every channel
    pub const fn splat(value: T) -> Self {
        Self { co: value, no2: value, nh3: value }
    }
}

impl<T> core::ops::Index<Channel> for ChannelMap<T> {
    type Output = T;

    fn index(&self, channel: Channel) -> &T {
        self.get(channel)
    }
}

impl<T> core::ops::IndexMut<Channel> for ChannelMap<T> {
    fn index_mut(&mut self, channel: Channel) -> &mut T {
        self.get_mut(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_and_channel_map_one_to_one() {
        for gas in Gas::ALL {
            assert_eq!(gas.channel().gas(), gas);
        }
        for channel in Channel::ALL {
            assert_eq!(channel.gas().channel(), channel);
        }
    }

    #[test]
    fn map_indexes_by_channel() {
        let mut pins = ChannelMap::new(4u8, 5, 6);
        assert_eq!(pins[Channel::Co], 4);
        assert_eq!(pins[Channel::No2], 5);
        assert_eq!(pins[Channel::Nh3], 6);

        pins[Channel::No2] = 9;
        assert_eq!(pins.no2, 9);
    }

    #[test]
    fn iteration_follows_polling_order() {
        let map = ChannelMap::new('c', 'n', 'a');
        let mut order = [Channel::Co; 3];
        for (slot, (channel, _)) in order.iter_mut().zip(map.iter()) {
            *slot = channel;
        }
        assert_eq!(order, Channel::ALL);
    }

    #[test]
    fn from_fn_visits_each_channel_once() {
        let mut calls = 0;
        let map = ChannelMap::from_fn(|channel| {
            calls += 1;
            channel.name().len()
        });
        assert_eq!(calls, 3);
        assert_eq!(map, ChannelMap::new(2, 3, 3));
    }
}
