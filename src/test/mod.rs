// SPDX-License-Identifier: Apache-2.0
mod mock;

pub(crate) use mock::{MockCamera, MockCs, MockDelay, MockI2c, MockSpi, SpiOperation};
