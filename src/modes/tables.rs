//! Register programming tables.
//!
//! All entries are single-byte writes applied in order.

use crate::regs::Reg;

/// Device-wide settings written once per power cycle.
pub static COMMON_REGS: [Reg; 646] = [
    Reg::new(0x0100, 0x00),
    Reg::new(0x0136, 0x18),
    Reg::new(0x0137, 0x00),
    Reg::new(0x33f0, 0x01),
    Reg::new(0x33f1, 0x03),
    Reg::new(0x0111, 0x02),
    Reg::new(0x3062, 0x00),
    Reg::new(0x3063, 0x30),
    Reg::new(0x3076, 0x00),
    Reg::new(0x3077, 0x30),
    Reg::new(0x1f06, 0x06),
    Reg::new(0x1f07, 0x82),
    Reg::new(0x1f04, 0x71),
    Reg::new(0x1f05, 0x01),
    Reg::new(0x1f08, 0x01),
    Reg::new(0x5bfe, 0x14),
    Reg::new(0x5c0d, 0x2d),
    Reg::new(0x5c1c, 0x30),
    Reg::new(0x5c2b, 0x32),
    Reg::new(0x5c37, 0x2e),
    Reg::new(0x5c40, 0x30),
    Reg::new(0x5c50, 0x14),
    Reg::new(0x5c5f, 0x28),
    Reg::new(0x5c6e, 0x28),
    Reg::new(0x5c7d, 0x32),
    Reg::new(0x5c89, 0x37),
    Reg::new(0x5c92, 0x56),
    Reg::new(0x5bfc, 0x12),
    Reg::new(0x5c0b, 0x2a),
    Reg::new(0x5c1a, 0x2c),
    Reg::new(0x5c29, 0x2f),
    Reg::new(0x5c36, 0x2e),
    Reg::new(0x5c3f, 0x2e),
    Reg::new(0x5c4e, 0x06),
    Reg::new(0x5c5d, 0x1e),
    Reg::new(0x5c6c, 0x20),
    Reg::new(0x5c7b, 0x1e),
    Reg::new(0x5c88, 0x32),
    Reg::new(0x5c91, 0x32),
    Reg::new(0x5c02, 0x14),
    Reg::new(0x5c11, 0x2f),
    Reg::new(0x5c20, 0x32),
    Reg::new(0x5c2f, 0x34),
    Reg::new(0x5c39, 0x31),
    Reg::new(0x5c42, 0x31),
    Reg::new(0x5c8b, 0x28),
    Reg::new(0x5c94, 0x28),
    Reg::new(0x5c00, 0x10),
    Reg::new(0x5c0f, 0x2c),
    Reg::new(0x5c1e, 0x2e),
    Reg::new(0x5c2d, 0x32),
    Reg::new(0x5c38, 0x2e),
    Reg::new(0x5c41, 0x2b),
    Reg::new(0x5c61, 0x0a),
    Reg::new(0x5c70, 0x0a),
    Reg::new(0x5c7f, 0x0a),
    Reg::new(0x5c8a, 0x1e),
    Reg::new(0x5c93, 0x2a),
    Reg::new(0x5bfa, 0x2b),
    Reg::new(0x5c09, 0x2d),
    Reg::new(0x5c18, 0x2e),
    Reg::new(0x5c27, 0x30),
    Reg::new(0x5c5b, 0x28),
    Reg::new(0x5c6a, 0x22),
    Reg::new(0x5c79, 0x42),
    Reg::new(0x5bfb, 0x2c),
    Reg::new(0x5c0a, 0x2f),
    Reg::new(0x5c19, 0x2e),
    Reg::new(0x5c28, 0x2e),
    Reg::new(0x5c4d, 0x20),
    Reg::new(0x5c5c, 0x1e),
    Reg::new(0x5c6b, 0x32),
    Reg::new(0x5c7a, 0x32),
    Reg::new(0x5bfd, 0x30),
    Reg::new(0x5c0c, 0x32),
    Reg::new(0x5c1b, 0x2e),
    Reg::new(0x5c2a, 0x30),
    Reg::new(0x5c4f, 0x28),
    Reg::new(0x5c5e, 0x32),
    Reg::new(0x5c6d, 0x37),
    Reg::new(0x5c7c, 0x56),
    Reg::new(0x5bff, 0x2e),
    Reg::new(0x5c0e, 0x32),
    Reg::new(0x5c1d, 0x2e),
    Reg::new(0x5c2c, 0x2b),
    Reg::new(0x5c51, 0x0a),
    Reg::new(0x5c60, 0x0a),
    Reg::new(0x5c6f, 0x1e),
    Reg::new(0x5c7e, 0x2a),
    Reg::new(0x5c01, 0x32),
    Reg::new(0x5c10, 0x34),
    Reg::new(0x5c1f, 0x31),
    Reg::new(0x5c2e, 0x31),
    Reg::new(0x5c71, 0x28),
    Reg::new(0x5c80, 0x28),
    Reg::new(0x5c4c, 0x2a),
    Reg::new(0x33f2, 0x01),
    Reg::new(0x1f04, 0x73),
    Reg::new(0x1f05, 0x01),
    Reg::new(0x5bfa, 0x35),
    Reg::new(0x5c09, 0x38),
    Reg::new(0x5c18, 0x3a),
    Reg::new(0x5c27, 0x38),
    Reg::new(0x5c5b, 0x25),
    Reg::new(0x5c6a, 0x24),
    Reg::new(0x5c79, 0x47),
    Reg::new(0x5bfc, 0x15),
    Reg::new(0x5c0b, 0x2e),
    Reg::new(0x5c1a, 0x36),
    Reg::new(0x5c29, 0x38),
    Reg::new(0x5c36, 0x36),
    Reg::new(0x5c3f, 0x36),
    Reg::new(0x5c4e, 0x0b),
    Reg::new(0x5c5d, 0x20),
    Reg::new(0x5c6c, 0x2a),
    Reg::new(0x5c7b, 0x25),
    Reg::new(0x5c88, 0x25),
    Reg::new(0x5c91, 0x22),
    Reg::new(0x5bfe, 0x15),
    Reg::new(0x5c0d, 0x32),
    Reg::new(0x5c1c, 0x36),
    Reg::new(0x5c2b, 0x36),
    Reg::new(0x5c37, 0x3a),
    Reg::new(0x5c40, 0x39),
    Reg::new(0x5c50, 0x06),
    Reg::new(0x5c5f, 0x22),
    Reg::new(0x5c6e, 0x23),
    Reg::new(0x5c7d, 0x2e),
    Reg::new(0x5c89, 0x44),
    Reg::new(0x5c92, 0x51),
    Reg::new(0x5d7f, 0x0a),
    Reg::new(0x5c00, 0x17),
    Reg::new(0x5c0f, 0x36),
    Reg::new(0x5c1e, 0x38),
    Reg::new(0x5c2d, 0x3c),
    Reg::new(0x5c38, 0x38),
    Reg::new(0x5c41, 0x36),
    Reg::new(0x5c52, 0x0a),
    Reg::new(0x5c61, 0x21),
    Reg::new(0x5c70, 0x23),
    Reg::new(0x5c7f, 0x1b),
    Reg::new(0x5c8a, 0x22),
    Reg::new(0x5c93, 0x20),
    Reg::new(0x5c02, 0x1a),
    Reg::new(0x5c11, 0x3e),
    Reg::new(0x5c20, 0x3f),
    Reg::new(0x5c2f, 0x3d),
    Reg::new(0x5c39, 0x3e),
    Reg::new(0x5c42, 0x3c),
    Reg::new(0x5c54, 0x02),
    Reg::new(0x5c63, 0x12),
    Reg::new(0x5c72, 0x14),
    Reg::new(0x5c81, 0x24),
    Reg::new(0x5c8b, 0x1c),
    Reg::new(0x5c94, 0x4e),
    Reg::new(0x5d8a, 0x09),
    Reg::new(0x5bfb, 0x36),
    Reg::new(0x5c0a, 0x38),
    Reg::new(0x5c19, 0x36),
    Reg::new(0x5c28, 0x36),
    Reg::new(0x5c4d, 0x2a),
    Reg::new(0x5c5c, 0x25),
    Reg::new(0x5c6b, 0x25),
    Reg::new(0x5c7a, 0x22),
    Reg::new(0x5bfd, 0x36),
    Reg::new(0x5c0c, 0x36),
    Reg::new(0x5c1b, 0x3a),
    Reg::new(0x5c2a, 0x39),
    Reg::new(0x5c4f, 0x23),
    Reg::new(0x5c5e, 0x2e),
    Reg::new(0x5c6d, 0x44),
    Reg::new(0x5c7c, 0x51),
    Reg::new(0x5d63, 0x0a),
    Reg::new(0x5bff, 0x38),
    Reg::new(0x5c0e, 0x3c),
    Reg::new(0x5c1d, 0x38),
    Reg::new(0x5c2c, 0x36),
    Reg::new(0x5c51, 0x23),
    Reg::new(0x5c60, 0x1b),
    Reg::new(0x5c6f, 0x22),
    Reg::new(0x5c7e, 0x20),
    Reg::new(0x5c01, 0x3f),
    Reg::new(0x5c10, 0x3d),
    Reg::new(0x5c1f, 0x3e),
    Reg::new(0x5c2e, 0x3c),
    Reg::new(0x5c53, 0x14),
    Reg::new(0x5c62, 0x24),
    Reg::new(0x5c71, 0x1c),
    Reg::new(0x5c80, 0x4e),
    Reg::new(0x5d76, 0x09),
    Reg::new(0x5c4c, 0x2a),
    Reg::new(0x33f2, 0x02),
    Reg::new(0x1f04, 0x78),
    Reg::new(0x1f05, 0x01),
    Reg::new(0x5bfa, 0x37),
    Reg::new(0x5c09, 0x36),
    Reg::new(0x5c18, 0x39),
    Reg::new(0x5c27, 0x38),
    Reg::new(0x5c5b, 0x27),
    Reg::new(0x5c6a, 0x2b),
    Reg::new(0x5c79, 0x48),
    Reg::new(0x5bfc, 0x16),
    Reg::new(0x5c0b, 0x32),
    Reg::new(0x5c1a, 0x33),
    Reg::new(0x5c29, 0x37),
    Reg::new(0x5c36, 0x36),
    Reg::new(0x5c3f, 0x35),
    Reg::new(0x5c4e, 0x0d),
    Reg::new(0x5c5d, 0x2d),
    Reg::new(0x5c6c, 0x23),
    Reg::new(0x5c7b, 0x25),
    Reg::new(0x5c88, 0x31),
    Reg::new(0x5c91, 0x2e),
    Reg::new(0x5bfe, 0x15),
    Reg::new(0x5c0d, 0x31),
    Reg::new(0x5c1c, 0x35),
    Reg::new(0x5c2b, 0x36),
    Reg::new(0x5c37, 0x35),
    Reg::new(0x5c40, 0x37),
    Reg::new(0x5c50, 0x0f),
    Reg::new(0x5c5f, 0x31),
    Reg::new(0x5c6e, 0x30),
    Reg::new(0x5c7d, 0x33),
    Reg::new(0x5c89, 0x36),
    Reg::new(0x5c92, 0x5b),
    Reg::new(0x5c00, 0x13),
    Reg::new(0x5c0f, 0x2f),
    Reg::new(0x5c1e, 0x2e),
    Reg::new(0x5c2d, 0x34),
    Reg::new(0x5c38, 0x33),
    Reg::new(0x5c41, 0x32),
    Reg::new(0x5c52, 0x0d),
    Reg::new(0x5c61, 0x27),
    Reg::new(0x5c70, 0x28),
    Reg::new(0x5c7f, 0x1f),
    Reg::new(0x5c8a, 0x25),
    Reg::new(0x5c93, 0x2c),
    Reg::new(0x5c02, 0x15),
    Reg::new(0x5c11, 0x36),
    Reg::new(0x5c20, 0x39),
    Reg::new(0x5c2f, 0x3a),
    Reg::new(0x5c39, 0x37),
    Reg::new(0x5c42, 0x37),
    Reg::new(0x5c54, 0x04),
    Reg::new(0x5c63, 0x1c),
    Reg::new(0x5c72, 0x1c),
    Reg::new(0x5c81, 0x1c),
    Reg::new(0x5c8b, 0x28),
    Reg::new(0x5c94, 0x24),
    Reg::new(0x5bfb, 0x33),
    Reg::new(0x5c0a, 0x37),
    Reg::new(0x5c19, 0x36),
    Reg::new(0x5c28, 0x35),
    Reg::new(0x5c4d, 0x23),
    Reg::new(0x5c5c, 0x25),
    Reg::new(0x5c6b, 0x31),
    Reg::new(0x5c7a, 0x2e),
    Reg::new(0x5bfd, 0x35),
    Reg::new(0x5c0c, 0x36),
    Reg::new(0x5c1b, 0x35),
    Reg::new(0x5c2a, 0x37),
    Reg::new(0x5c4f, 0x30),
    Reg::new(0x5c5e, 0x33),
    Reg::new(0x5c6d, 0x36),
    Reg::new(0x5c7c, 0x5b),
    Reg::new(0x5bff, 0x2e),
    Reg::new(0x5c0e, 0x34),
    Reg::new(0x5c1d, 0x33),
    Reg::new(0x5c2c, 0x32),
    Reg::new(0x5c51, 0x28),
    Reg::new(0x5c60, 0x1f),
    Reg::new(0x5c6f, 0x25),
    Reg::new(0x5c7e, 0x2c),
    Reg::new(0x5c01, 0x39),
    Reg::new(0x5c10, 0x3a),
    Reg::new(0x5c1f, 0x37),
    Reg::new(0x5c2e, 0x37),
    Reg::new(0x5c53, 0x1c),
    Reg::new(0x5c62, 0x1c),
    Reg::new(0x5c71, 0x28),
    Reg::new(0x5c80, 0x24),
    Reg::new(0x5c4c, 0x2c),
    Reg::new(0x33f2, 0x03),
    Reg::new(0x1f08, 0x00),
    Reg::new(0x32c8, 0x00),
    Reg::new(0x4017, 0x40),
    Reg::new(0x40a2, 0x01),
    Reg::new(0x40ac, 0x01),
    Reg::new(0x4328, 0x00),
    Reg::new(0x4329, 0xb3),
    Reg::new(0x4e15, 0x10),
    Reg::new(0x4e19, 0x2f),
    Reg::new(0x4e21, 0x0f),
    Reg::new(0x4e2f, 0x10),
    Reg::new(0x4e3d, 0x10),
    Reg::new(0x4e41, 0x2f),
    Reg::new(0x4e57, 0x29),
    Reg::new(0x4ffb, 0x2f),
    Reg::new(0x5011, 0x24),
    Reg::new(0x501d, 0x03),
    Reg::new(0x505f, 0x41),
    Reg::new(0x5060, 0xdf),
    Reg::new(0x5065, 0xdf),
    Reg::new(0x5066, 0x37),
    Reg::new(0x506e, 0x57),
    Reg::new(0x5070, 0xc5),
    Reg::new(0x5072, 0x57),
    Reg::new(0x5075, 0x53),
    Reg::new(0x5076, 0x55),
    Reg::new(0x5077, 0xc1),
    Reg::new(0x5078, 0xc3),
    Reg::new(0x5079, 0x53),
    Reg::new(0x507a, 0x55),
    Reg::new(0x507d, 0x57),
    Reg::new(0x507e, 0xdf),
    Reg::new(0x507f, 0xc5),
    Reg::new(0x5081, 0x57),
    Reg::new(0x53c8, 0x01),
    Reg::new(0x53c9, 0xe2),
    Reg::new(0x53ca, 0x03),
    Reg::new(0x5422, 0x7a),
    Reg::new(0x548e, 0x40),
    Reg::new(0x5497, 0x5e),
    Reg::new(0x54a1, 0x40),
    Reg::new(0x54a9, 0x40),
    Reg::new(0x54b2, 0x5e),
    Reg::new(0x54bc, 0x40),
    Reg::new(0x57c6, 0x00),
    Reg::new(0x583d, 0x0e),
    Reg::new(0x583e, 0x0e),
    Reg::new(0x583f, 0x0e),
    Reg::new(0x5840, 0x0e),
    Reg::new(0x5841, 0x0e),
    Reg::new(0x5842, 0x0e),
    Reg::new(0x5900, 0x12),
    Reg::new(0x5901, 0x12),
    Reg::new(0x5902, 0x14),
    Reg::new(0x5903, 0x12),
    Reg::new(0x5904, 0x14),
    Reg::new(0x5905, 0x12),
    Reg::new(0x5906, 0x14),
    Reg::new(0x5907, 0x12),
    Reg::new(0x590f, 0x12),
    Reg::new(0x5911, 0x12),
    Reg::new(0x5913, 0x12),
    Reg::new(0x591c, 0x12),
    Reg::new(0x591e, 0x12),
    Reg::new(0x5920, 0x12),
    Reg::new(0x5948, 0x08),
    Reg::new(0x5949, 0x08),
    Reg::new(0x594a, 0x08),
    Reg::new(0x594b, 0x08),
    Reg::new(0x594c, 0x08),
    Reg::new(0x594d, 0x08),
    Reg::new(0x594e, 0x08),
    Reg::new(0x594f, 0x08),
    Reg::new(0x595c, 0x08),
    Reg::new(0x595e, 0x08),
    Reg::new(0x5960, 0x08),
    Reg::new(0x596e, 0x08),
    Reg::new(0x5970, 0x08),
    Reg::new(0x5972, 0x08),
    Reg::new(0x597e, 0x0f),
    Reg::new(0x597f, 0x0f),
    Reg::new(0x599a, 0x0f),
    Reg::new(0x59de, 0x08),
    Reg::new(0x59df, 0x08),
    Reg::new(0x59fa, 0x08),
    Reg::new(0x5a59, 0x22),
    Reg::new(0x5a5b, 0x22),
    Reg::new(0x5a5d, 0x1a),
    Reg::new(0x5a5f, 0x22),
    Reg::new(0x5a61, 0x1a),
    Reg::new(0x5a63, 0x22),
    Reg::new(0x5a65, 0x1a),
    Reg::new(0x5a67, 0x22),
    Reg::new(0x5a77, 0x22),
    Reg::new(0x5a7b, 0x22),
    Reg::new(0x5a7f, 0x22),
    Reg::new(0x5a91, 0x22),
    Reg::new(0x5a95, 0x22),
    Reg::new(0x5a99, 0x22),
    Reg::new(0x5ae9, 0x66),
    Reg::new(0x5aeb, 0x66),
    Reg::new(0x5aed, 0x5e),
    Reg::new(0x5aef, 0x66),
    Reg::new(0x5af1, 0x5e),
    Reg::new(0x5af3, 0x66),
    Reg::new(0x5af5, 0x5e),
    Reg::new(0x5af7, 0x66),
    Reg::new(0x5b07, 0x66),
    Reg::new(0x5b0b, 0x66),
    Reg::new(0x5b0f, 0x66),
    Reg::new(0x5b21, 0x66),
    Reg::new(0x5b25, 0x66),
    Reg::new(0x5b29, 0x66),
    Reg::new(0x5b79, 0x46),
    Reg::new(0x5b7b, 0x3e),
    Reg::new(0x5b7d, 0x3e),
    Reg::new(0x5b89, 0x46),
    Reg::new(0x5b8b, 0x46),
    Reg::new(0x5b97, 0x46),
    Reg::new(0x5b99, 0x46),
    Reg::new(0x5c9e, 0x0a),
    Reg::new(0x5c9f, 0x08),
    Reg::new(0x5ca0, 0x0a),
    Reg::new(0x5ca1, 0x0a),
    Reg::new(0x5ca2, 0x0b),
    Reg::new(0x5ca3, 0x06),
    Reg::new(0x5ca4, 0x04),
    Reg::new(0x5ca5, 0x06),
    Reg::new(0x5ca6, 0x04),
    Reg::new(0x5cad, 0x0b),
    Reg::new(0x5cae, 0x0a),
    Reg::new(0x5caf, 0x0c),
    Reg::new(0x5cb0, 0x0a),
    Reg::new(0x5cb1, 0x0b),
    Reg::new(0x5cb2, 0x08),
    Reg::new(0x5cb3, 0x06),
    Reg::new(0x5cb4, 0x08),
    Reg::new(0x5cb5, 0x04),
    Reg::new(0x5cbc, 0x0b),
    Reg::new(0x5cbd, 0x09),
    Reg::new(0x5cbe, 0x08),
    Reg::new(0x5cbf, 0x09),
    Reg::new(0x5cc0, 0x0a),
    Reg::new(0x5cc1, 0x08),
    Reg::new(0x5cc2, 0x06),
    Reg::new(0x5cc3, 0x08),
    Reg::new(0x5cc4, 0x06),
    Reg::new(0x5ccb, 0x0a),
    Reg::new(0x5ccc, 0x09),
    Reg::new(0x5ccd, 0x0a),
    Reg::new(0x5cce, 0x08),
    Reg::new(0x5ccf, 0x0a),
    Reg::new(0x5cd0, 0x08),
    Reg::new(0x5cd1, 0x08),
    Reg::new(0x5cd2, 0x08),
    Reg::new(0x5cd3, 0x08),
    Reg::new(0x5cda, 0x09),
    Reg::new(0x5cdb, 0x09),
    Reg::new(0x5cdc, 0x08),
    Reg::new(0x5cdd, 0x08),
    Reg::new(0x5ce3, 0x09),
    Reg::new(0x5ce4, 0x08),
    Reg::new(0x5ce5, 0x08),
    Reg::new(0x5ce6, 0x08),
    Reg::new(0x5cf4, 0x04),
    Reg::new(0x5d04, 0x04),
    Reg::new(0x5d13, 0x06),
    Reg::new(0x5d22, 0x06),
    Reg::new(0x5d23, 0x04),
    Reg::new(0x5d2e, 0x06),
    Reg::new(0x5d37, 0x06),
    Reg::new(0x5d6f, 0x09),
    Reg::new(0x5d72, 0x0f),
    Reg::new(0x5d88, 0x0f),
    Reg::new(0x5de6, 0x01),
    Reg::new(0x5de7, 0x01),
    Reg::new(0x5de8, 0x01),
    Reg::new(0x5de9, 0x01),
    Reg::new(0x5dea, 0x01),
    Reg::new(0x5deb, 0x01),
    Reg::new(0x5dec, 0x01),
    Reg::new(0x5df2, 0x01),
    Reg::new(0x5df3, 0x01),
    Reg::new(0x5df4, 0x01),
    Reg::new(0x5df5, 0x01),
    Reg::new(0x5df6, 0x01),
    Reg::new(0x5df7, 0x01),
    Reg::new(0x5df8, 0x01),
    Reg::new(0x5dfe, 0x01),
    Reg::new(0x5dff, 0x01),
    Reg::new(0x5e00, 0x01),
    Reg::new(0x5e01, 0x01),
    Reg::new(0x5e02, 0x01),
    Reg::new(0x5e03, 0x01),
    Reg::new(0x5e04, 0x01),
    Reg::new(0x5e0a, 0x01),
    Reg::new(0x5e0b, 0x01),
    Reg::new(0x5e0c, 0x01),
    Reg::new(0x5e0d, 0x01),
    Reg::new(0x5e0e, 0x01),
    Reg::new(0x5e0f, 0x01),
    Reg::new(0x5e10, 0x01),
    Reg::new(0x5e16, 0x01),
    Reg::new(0x5e17, 0x01),
    Reg::new(0x5e18, 0x01),
    Reg::new(0x5e1e, 0x01),
    Reg::new(0x5e1f, 0x01),
    Reg::new(0x5e20, 0x01),
    Reg::new(0x5e6e, 0x5a),
    Reg::new(0x5e6f, 0x46),
    Reg::new(0x5e70, 0x46),
    Reg::new(0x5e71, 0x3c),
    Reg::new(0x5e72, 0x3c),
    Reg::new(0x5e73, 0x28),
    Reg::new(0x5e74, 0x28),
    Reg::new(0x5e75, 0x6e),
    Reg::new(0x5e76, 0x6e),
    Reg::new(0x5e81, 0x46),
    Reg::new(0x5e83, 0x3c),
    Reg::new(0x5e85, 0x28),
    Reg::new(0x5e87, 0x6e),
    Reg::new(0x5e92, 0x46),
    Reg::new(0x5e94, 0x3c),
    Reg::new(0x5e96, 0x28),
    Reg::new(0x5e98, 0x6e),
    Reg::new(0x5ecb, 0x26),
    Reg::new(0x5ecc, 0x26),
    Reg::new(0x5ecd, 0x26),
    Reg::new(0x5ece, 0x26),
    Reg::new(0x5ed2, 0x26),
    Reg::new(0x5ed3, 0x26),
    Reg::new(0x5ed4, 0x26),
    Reg::new(0x5ed5, 0x26),
    Reg::new(0x5ed9, 0x26),
    Reg::new(0x5eda, 0x26),
    Reg::new(0x5ee5, 0x08),
    Reg::new(0x5ee6, 0x08),
    Reg::new(0x5ee7, 0x08),
    Reg::new(0x6006, 0x14),
    Reg::new(0x6007, 0x14),
    Reg::new(0x6008, 0x14),
    Reg::new(0x6009, 0x14),
    Reg::new(0x600a, 0x14),
    Reg::new(0x600b, 0x14),
    Reg::new(0x600c, 0x14),
    Reg::new(0x600d, 0x22),
    Reg::new(0x600e, 0x22),
    Reg::new(0x600f, 0x14),
    Reg::new(0x601a, 0x14),
    Reg::new(0x601b, 0x14),
    Reg::new(0x601c, 0x14),
    Reg::new(0x601d, 0x14),
    Reg::new(0x601e, 0x14),
    Reg::new(0x601f, 0x14),
    Reg::new(0x6020, 0x14),
    Reg::new(0x6021, 0x22),
    Reg::new(0x6022, 0x22),
    Reg::new(0x6023, 0x14),
    Reg::new(0x602e, 0x14),
    Reg::new(0x602f, 0x14),
    Reg::new(0x6030, 0x14),
    Reg::new(0x6031, 0x22),
    Reg::new(0x6039, 0x14),
    Reg::new(0x603a, 0x14),
    Reg::new(0x603b, 0x14),
    Reg::new(0x603c, 0x22),
    Reg::new(0x6132, 0x0f),
    Reg::new(0x6133, 0x0f),
    Reg::new(0x6134, 0x0f),
    Reg::new(0x6135, 0x0f),
    Reg::new(0x6136, 0x0f),
    Reg::new(0x6137, 0x0f),
    Reg::new(0x6138, 0x0f),
    Reg::new(0x613e, 0x0f),
    Reg::new(0x613f, 0x0f),
    Reg::new(0x6140, 0x0f),
    Reg::new(0x6141, 0x0f),
    Reg::new(0x6142, 0x0f),
    Reg::new(0x6143, 0x0f),
    Reg::new(0x6144, 0x0f),
    Reg::new(0x614a, 0x0f),
    Reg::new(0x614b, 0x0f),
    Reg::new(0x614c, 0x0f),
    Reg::new(0x614d, 0x0f),
    Reg::new(0x614e, 0x0f),
    Reg::new(0x614f, 0x0f),
    Reg::new(0x6150, 0x0f),
    Reg::new(0x6156, 0x0f),
    Reg::new(0x6157, 0x0f),
    Reg::new(0x6158, 0x0f),
    Reg::new(0x6159, 0x0f),
    Reg::new(0x615a, 0x0f),
    Reg::new(0x615b, 0x0f),
    Reg::new(0x615c, 0x0f),
    Reg::new(0x6162, 0x0f),
    Reg::new(0x6163, 0x0f),
    Reg::new(0x6164, 0x0f),
    Reg::new(0x616a, 0x0f),
    Reg::new(0x616b, 0x0f),
    Reg::new(0x616c, 0x0f),
    Reg::new(0x6226, 0x00),
    Reg::new(0x84f8, 0x01),
    Reg::new(0x8501, 0x00),
    Reg::new(0x8502, 0x01),
    Reg::new(0x8505, 0x00),
    Reg::new(0x8744, 0x00),
    Reg::new(0x883c, 0x01),
    Reg::new(0x8845, 0x00),
    Reg::new(0x8846, 0x01),
    Reg::new(0x8849, 0x00),
    Reg::new(0x9004, 0x1f),
    Reg::new(0x9064, 0x4d),
    Reg::new(0x9065, 0x3d),
    Reg::new(0x922e, 0x91),
    Reg::new(0x922f, 0x2a),
    Reg::new(0x9230, 0xe2),
    Reg::new(0x9231, 0xc0),
    Reg::new(0x9232, 0xe2),
    Reg::new(0x9233, 0xc1),
    Reg::new(0x9234, 0xe2),
    Reg::new(0x9235, 0xc2),
    Reg::new(0x9236, 0xe2),
    Reg::new(0x9237, 0xc3),
    Reg::new(0x9238, 0xe2),
    Reg::new(0x9239, 0xd4),
    Reg::new(0x923a, 0xe2),
    Reg::new(0x923b, 0xd5),
    Reg::new(0x923c, 0x90),
    Reg::new(0x923d, 0x64),
    Reg::new(0xb0b9, 0x10),
    Reg::new(0xbc76, 0x00),
    Reg::new(0xbc77, 0x00),
    Reg::new(0xbc78, 0x00),
    Reg::new(0xbc79, 0x00),
    Reg::new(0xbc7b, 0x28),
    Reg::new(0xbc7c, 0x00),
    Reg::new(0xbc7d, 0x00),
    Reg::new(0xbc7f, 0xc0),
    Reg::new(0xc6b9, 0x01),
    Reg::new(0xecb5, 0x04),
    Reg::new(0xecbf, 0x04),
    Reg::new(0x0112, 0x0a),
    Reg::new(0x0113, 0x0a),
    Reg::new(0x0114, 0x01),
    Reg::new(0x0301, 0x08),
    Reg::new(0x0303, 0x02),
    Reg::new(0x0305, 0x04),
    Reg::new(0x0306, 0x01),
    Reg::new(0x0307, 0x2c),
    Reg::new(0x030b, 0x02),
    Reg::new(0x030d, 0x04),
    Reg::new(0x030e, 0x01),
    Reg::new(0x030f, 0x30),
    Reg::new(0x0310, 0x01),
    Reg::new(0x4018, 0x00),
    Reg::new(0x4019, 0x00),
    Reg::new(0x401a, 0x00),
    Reg::new(0x401b, 0x00),
    Reg::new(0x3400, 0x01),
    Reg::new(0x3092, 0x01),
    Reg::new(0x3093, 0x00),
    Reg::new(0x0350, 0x00),
    Reg::new(0x3419, 0x00),
];

/// 9152x6944 full resolution, 2.7 fps.
pub static MODE_9152X6944: [Reg; 63] = [
    Reg::new(0x0342, 0xb6),
    Reg::new(0x0343, 0xb2),
    Reg::new(0x0340, 0x1b),
    Reg::new(0x0341, 0x76),
    Reg::new(0x0344, 0x00),
    Reg::new(0x0345, 0x00),
    Reg::new(0x0346, 0x00),
    Reg::new(0x0347, 0x00),
    Reg::new(0x0348, 0x24),
    Reg::new(0x0349, 0x1f),
    Reg::new(0x034a, 0x1b),
    Reg::new(0x034b, 0x1f),
    Reg::new(0x0900, 0x00),
    Reg::new(0x0901, 0x11),
    Reg::new(0x0902, 0x0a),
    Reg::new(0x30d8, 0x00),
    Reg::new(0x3200, 0x01),
    Reg::new(0x3201, 0x01),
    Reg::new(0x0408, 0x00),
    Reg::new(0x0409, 0x00),
    Reg::new(0x040a, 0x00),
    Reg::new(0x040b, 0x00),
    Reg::new(0x040c, 0x23),
    Reg::new(0x040d, 0xc0),
    Reg::new(0x040e, 0x1b),
    Reg::new(0x040f, 0x20),
    Reg::new(0x034c, 0x23),
    Reg::new(0x034d, 0xc0),
    Reg::new(0x034e, 0x1b),
    Reg::new(0x034f, 0x20),
    Reg::new(0x30d9, 0x01),
    Reg::new(0x32d5, 0x01),
    Reg::new(0x32d6, 0x00),
    Reg::new(0x401e, 0x00),
    Reg::new(0x40b8, 0x04),
    Reg::new(0x40b9, 0x20),
    Reg::new(0x40bc, 0x02),
    Reg::new(0x40bd, 0x58),
    Reg::new(0x40be, 0x02),
    Reg::new(0x40bf, 0x58),
    Reg::new(0x41a4, 0x00),
    Reg::new(0x5a09, 0x01),
    Reg::new(0x5a17, 0x01),
    Reg::new(0x5a25, 0x01),
    Reg::new(0x5a33, 0x01),
    Reg::new(0x98d7, 0x14),
    Reg::new(0x98d8, 0x14),
    Reg::new(0x98d9, 0x00),
    Reg::new(0x99c4, 0x00),
    Reg::new(0x0202, 0x03),
    Reg::new(0x0203, 0xe8),
    Reg::new(0x0204, 0x00),
    Reg::new(0x0205, 0x00),
    Reg::new(0x020e, 0x01),
    Reg::new(0x020f, 0x00),
    Reg::new(0x341a, 0x00),
    Reg::new(0x341b, 0x00),
    Reg::new(0x341c, 0x00),
    Reg::new(0x341d, 0x00),
    Reg::new(0x341e, 0x02),
    Reg::new(0x341f, 0x3c),
    Reg::new(0x3420, 0x02),
    Reg::new(0x3421, 0x42),
];

/// 8000x6000 cropped, 3.0 fps.
pub static MODE_8000X6000: [Reg; 63] = [
    Reg::new(0x0342, 0xb6),
    Reg::new(0x0343, 0xb2),
    Reg::new(0x0340, 0x19),
    Reg::new(0x0341, 0x0e),
    Reg::new(0x0344, 0x02),
    Reg::new(0x0345, 0x70),
    Reg::new(0x0346, 0x01),
    Reg::new(0x0347, 0xd8),
    Reg::new(0x0348, 0x21),
    Reg::new(0x0349, 0xaf),
    Reg::new(0x034a, 0x19),
    Reg::new(0x034b, 0x47),
    Reg::new(0x0900, 0x00),
    Reg::new(0x0901, 0x11),
    Reg::new(0x0902, 0x0a),
    Reg::new(0x30d8, 0x00),
    Reg::new(0x3200, 0x01),
    Reg::new(0x3201, 0x01),
    Reg::new(0x0408, 0x00),
    Reg::new(0x0409, 0x00),
    Reg::new(0x040a, 0x00),
    Reg::new(0x040b, 0x00),
    Reg::new(0x040c, 0x1f),
    Reg::new(0x040d, 0x40),
    Reg::new(0x040e, 0x17),
    Reg::new(0x040f, 0x70),
    Reg::new(0x034c, 0x1f),
    Reg::new(0x034d, 0x40),
    Reg::new(0x034e, 0x17),
    Reg::new(0x034f, 0x70),
    Reg::new(0x30d9, 0x01),
    Reg::new(0x32d5, 0x01),
    Reg::new(0x32d6, 0x00),
    Reg::new(0x401e, 0x00),
    Reg::new(0x40b8, 0x04),
    Reg::new(0x40b9, 0x20),
    Reg::new(0x40bc, 0x02),
    Reg::new(0x40bd, 0x58),
    Reg::new(0x40be, 0x02),
    Reg::new(0x40bf, 0x58),
    Reg::new(0x41a4, 0x00),
    Reg::new(0x5a09, 0x01),
    Reg::new(0x5a17, 0x01),
    Reg::new(0x5a25, 0x01),
    Reg::new(0x5a33, 0x01),
    Reg::new(0x98d7, 0x14),
    Reg::new(0x98d8, 0x14),
    Reg::new(0x98d9, 0x00),
    Reg::new(0x99c4, 0x00),
    Reg::new(0x0202, 0x03),
    Reg::new(0x0203, 0xe8),
    Reg::new(0x0204, 0x00),
    Reg::new(0x0205, 0x00),
    Reg::new(0x020e, 0x01),
    Reg::new(0x020f, 0x00),
    Reg::new(0x341a, 0x00),
    Reg::new(0x341b, 0x00),
    Reg::new(0x341c, 0x00),
    Reg::new(0x341d, 0x00),
    Reg::new(0x341e, 0x01),
    Reg::new(0x341f, 0xf4),
    Reg::new(0x3420, 0x01),
    Reg::new(0x3421, 0xf4),
];

/// 4624x3472 2x2 binned, 10 fps.
pub static MODE_4624X3472: [Reg; 57] = [
    Reg::new(0x0342, 0x63),
    Reg::new(0x0343, 0x97),
    Reg::new(0x0340, 0x0d),
    Reg::new(0x0341, 0xca),
    Reg::new(0x0344, 0x00),
    Reg::new(0x0345, 0x00),
    Reg::new(0x0346, 0x00),
    Reg::new(0x0347, 0x00),
    Reg::new(0x0348, 0x24),
    Reg::new(0x0349, 0x1f),
    Reg::new(0x034a, 0x1b),
    Reg::new(0x034b, 0x1f),
    Reg::new(0x0900, 0x01),
    Reg::new(0x0901, 0x22),
    Reg::new(0x0902, 0x08),
    Reg::new(0x30d8, 0x04),
    Reg::new(0x3200, 0x41),
    Reg::new(0x3201, 0x41),
    Reg::new(0x0408, 0x00),
    Reg::new(0x0409, 0x00),
    Reg::new(0x040a, 0x00),
    Reg::new(0x040b, 0x00),
    Reg::new(0x040c, 0x12),
    Reg::new(0x040d, 0x10),
    Reg::new(0x040e, 0x0d),
    Reg::new(0x040f, 0x90),
    Reg::new(0x034c, 0x12),
    Reg::new(0x034d, 0x10),
    Reg::new(0x034e, 0x0d),
    Reg::new(0x034f, 0x90),
    Reg::new(0x30d9, 0x00),
    Reg::new(0x32d5, 0x00),
    Reg::new(0x32d6, 0x00),
    Reg::new(0x401e, 0x00),
    Reg::new(0x40b8, 0x01),
    Reg::new(0x40b9, 0x2c),
    Reg::new(0x40bc, 0x01),
    Reg::new(0x40bd, 0x18),
    Reg::new(0x40be, 0x00),
    Reg::new(0x40bf, 0x00),
    Reg::new(0x41a4, 0x00),
    Reg::new(0x5a09, 0x01),
    Reg::new(0x5a17, 0x01),
    Reg::new(0x5a25, 0x01),
    Reg::new(0x5a33, 0x01),
    Reg::new(0x98d7, 0xb4),
    Reg::new(0x98d8, 0x8c),
    Reg::new(0x98d9, 0x0a),
    Reg::new(0x99c4, 0x16),
    Reg::new(0x341a, 0x00),
    Reg::new(0x341b, 0x00),
    Reg::new(0x341c, 0x00),
    Reg::new(0x341d, 0x00),
    Reg::new(0x341e, 0x01),
    Reg::new(0x341f, 0x21),
    Reg::new(0x3420, 0x01),
    Reg::new(0x3421, 0x21),
];

/// 3840x2160 cropped and binned, 20 fps.
pub static MODE_3840X2160: [Reg; 57] = [
    Reg::new(0x0342, 0x4e),
    Reg::new(0x0343, 0xb7),
    Reg::new(0x0340, 0x08),
    Reg::new(0x0341, 0xb9),
    Reg::new(0x0344, 0x03),
    Reg::new(0x0345, 0x10),
    Reg::new(0x0346, 0x05),
    Reg::new(0x0347, 0x20),
    Reg::new(0x0348, 0x21),
    Reg::new(0x0349, 0x0f),
    Reg::new(0x034a, 0x15),
    Reg::new(0x034b, 0xff),
    Reg::new(0x0900, 0x01),
    Reg::new(0x0901, 0x22),
    Reg::new(0x0902, 0x08),
    Reg::new(0x30d8, 0x04),
    Reg::new(0x3200, 0x41),
    Reg::new(0x3201, 0x41),
    Reg::new(0x0408, 0x00),
    Reg::new(0x0409, 0x00),
    Reg::new(0x040a, 0x00),
    Reg::new(0x040b, 0x00),
    Reg::new(0x040c, 0x0f),
    Reg::new(0x040d, 0x00),
    Reg::new(0x040e, 0x08),
    Reg::new(0x040f, 0x70),
    Reg::new(0x034c, 0x0f),
    Reg::new(0x034d, 0x00),
    Reg::new(0x034e, 0x08),
    Reg::new(0x034f, 0x70),
    Reg::new(0x30d9, 0x00),
    Reg::new(0x32d5, 0x00),
    Reg::new(0x32d6, 0x00),
    Reg::new(0x401e, 0x00),
    Reg::new(0x40b8, 0x01),
    Reg::new(0x40b9, 0x2c),
    Reg::new(0x40bc, 0x01),
    Reg::new(0x40bd, 0x18),
    Reg::new(0x40be, 0x00),
    Reg::new(0x40bf, 0x00),
    Reg::new(0x41a4, 0x00),
    Reg::new(0x5a09, 0x01),
    Reg::new(0x5a17, 0x01),
    Reg::new(0x5a25, 0x01),
    Reg::new(0x5a33, 0x01),
    Reg::new(0x98d7, 0xb4),
    Reg::new(0x98d8, 0x8c),
    Reg::new(0x98d9, 0x0a),
    Reg::new(0x99c4, 0x16),
    Reg::new(0x341a, 0x00),
    Reg::new(0x341b, 0x00),
    Reg::new(0x341c, 0x00),
    Reg::new(0x341d, 0x00),
    Reg::new(0x341e, 0x00),
    Reg::new(0x341f, 0xf0),
    Reg::new(0x3420, 0x00),
    Reg::new(0x3421, 0xb4),
];

/// 2312x1736 4x4 binned, 30 fps.
pub static MODE_2312X1736: [Reg; 57] = [
    Reg::new(0x0342, 0x33),
    Reg::new(0x0343, 0x60),
    Reg::new(0x0340, 0x08),
    Reg::new(0x0341, 0xe9),
    Reg::new(0x0344, 0x00),
    Reg::new(0x0345, 0x00),
    Reg::new(0x0346, 0x00),
    Reg::new(0x0347, 0x00),
    Reg::new(0x0348, 0x24),
    Reg::new(0x0349, 0x1f),
    Reg::new(0x034a, 0x1b),
    Reg::new(0x034b, 0x1f),
    Reg::new(0x0900, 0x01),
    Reg::new(0x0901, 0x44),
    Reg::new(0x0902, 0x08),
    Reg::new(0x30d8, 0x04),
    Reg::new(0x3200, 0x43),
    Reg::new(0x3201, 0x43),
    Reg::new(0x0408, 0x00),
    Reg::new(0x0409, 0x00),
    Reg::new(0x040a, 0x00),
    Reg::new(0x040b, 0x00),
    Reg::new(0x040c, 0x09),
    Reg::new(0x040d, 0x08),
    Reg::new(0x040e, 0x06),
    Reg::new(0x040f, 0xc8),
    Reg::new(0x034c, 0x09),
    Reg::new(0x034d, 0x08),
    Reg::new(0x034e, 0x06),
    Reg::new(0x034f, 0xc8),
    Reg::new(0x30d9, 0x00),
    Reg::new(0x32d5, 0x00),
    Reg::new(0x32d6, 0x00),
    Reg::new(0x401e, 0x00),
    Reg::new(0x40b8, 0x01),
    Reg::new(0x40b9, 0x2c),
    Reg::new(0x40bc, 0x01),
    Reg::new(0x40bd, 0x18),
    Reg::new(0x40be, 0x00),
    Reg::new(0x40bf, 0x00),
    Reg::new(0x41a4, 0x00),
    Reg::new(0x5a09, 0x01),
    Reg::new(0x5a17, 0x01),
    Reg::new(0x5a25, 0x01),
    Reg::new(0x5a33, 0x01),
    Reg::new(0x98d7, 0xb4),
    Reg::new(0x98d8, 0x8c),
    Reg::new(0x98d9, 0x0a),
    Reg::new(0x99c4, 0x16),
    Reg::new(0x341a, 0x00),
    Reg::new(0x341b, 0x00),
    Reg::new(0x341c, 0x00),
    Reg::new(0x341d, 0x00),
    Reg::new(0x341e, 0x00),
    Reg::new(0x341f, 0x90),
    Reg::new(0x3420, 0x00),
    Reg::new(0x3421, 0x90),
];

/// 1920x1080 cropped and binned, 60 fps.
pub static MODE_1920X1080: [Reg; 57] = [
    Reg::new(0x0342, 0x29),
    Reg::new(0x0343, 0xe3),
    Reg::new(0x0340, 0x05),
    Reg::new(0x0341, 0x76),
    Reg::new(0x0344, 0x03),
    Reg::new(0x0345, 0x10),
    Reg::new(0x0346, 0x05),
    Reg::new(0x0347, 0x20),
    Reg::new(0x0348, 0x21),
    Reg::new(0x0349, 0x0f),
    Reg::new(0x034a, 0x16),
    Reg::new(0x034b, 0x0f),
    Reg::new(0x0900, 0x01),
    Reg::new(0x0901, 0x44),
    Reg::new(0x0902, 0x08),
    Reg::new(0x30d8, 0x04),
    Reg::new(0x3200, 0x43),
    Reg::new(0x3201, 0x43),
    Reg::new(0x0408, 0x00),
    Reg::new(0x0409, 0x00),
    Reg::new(0x040a, 0x00),
    Reg::new(0x040b, 0x00),
    Reg::new(0x040c, 0x07),
    Reg::new(0x040d, 0x80),
    Reg::new(0x040e, 0x04),
    Reg::new(0x040f, 0x38),
    Reg::new(0x034c, 0x07),
    Reg::new(0x034d, 0x80),
    Reg::new(0x034e, 0x04),
    Reg::new(0x034f, 0x38),
    Reg::new(0x30d9, 0x00),
    Reg::new(0x32d5, 0x00),
    Reg::new(0x32d6, 0x00),
    Reg::new(0x401e, 0x00),
    Reg::new(0x40b8, 0x01),
    Reg::new(0x40b9, 0x2c),
    Reg::new(0x40bc, 0x01),
    Reg::new(0x40bd, 0x18),
    Reg::new(0x40be, 0x00),
    Reg::new(0x40bf, 0x00),
    Reg::new(0x41a4, 0x00),
    Reg::new(0x5a09, 0x01),
    Reg::new(0x5a17, 0x01),
    Reg::new(0x5a25, 0x01),
    Reg::new(0x5a33, 0x01),
    Reg::new(0x98d7, 0xb4),
    Reg::new(0x98d8, 0x8c),
    Reg::new(0x98d9, 0x0a),
    Reg::new(0x99c4, 0x16),
    Reg::new(0x341a, 0x00),
    Reg::new(0x341b, 0x00),
    Reg::new(0x341c, 0x00),
    Reg::new(0x341d, 0x00),
    Reg::new(0x341e, 0x00),
    Reg::new(0x341f, 0x78),
    Reg::new(0x3420, 0x00),
    Reg::new(0x3421, 0x5a),
];

/// 1280x720 cropped and binned, 120 fps.
pub static MODE_1280X720: [Reg; 57] = [
    Reg::new(0x0342, 0x1b),
    Reg::new(0x0343, 0x08),
    Reg::new(0x0340, 0x04),
    Reg::new(0x0341, 0x3b),
    Reg::new(0x0344, 0x08),
    Reg::new(0x0345, 0x10),
    Reg::new(0x0346, 0x07),
    Reg::new(0x0347, 0xf0),
    Reg::new(0x0348, 0x1c),
    Reg::new(0x0349, 0x0f),
    Reg::new(0x034a, 0x13),
    Reg::new(0x034b, 0x3f),
    Reg::new(0x0900, 0x01),
    Reg::new(0x0901, 0x44),
    Reg::new(0x0902, 0x08),
    Reg::new(0x30d8, 0x04),
    Reg::new(0x3200, 0x43),
    Reg::new(0x3201, 0x43),
    Reg::new(0x0408, 0x00),
    Reg::new(0x0409, 0x00),
    Reg::new(0x040a, 0x00),
    Reg::new(0x040b, 0x00),
    Reg::new(0x040c, 0x05),
    Reg::new(0x040d, 0x00),
    Reg::new(0x040e, 0x02),
    Reg::new(0x040f, 0xd0),
    Reg::new(0x034c, 0x05),
    Reg::new(0x034d, 0x00),
    Reg::new(0x034e, 0x02),
    Reg::new(0x034f, 0xd0),
    Reg::new(0x30d9, 0x00),
    Reg::new(0x32d5, 0x00),
    Reg::new(0x32d6, 0x00),
    Reg::new(0x401e, 0x00),
    Reg::new(0x40b8, 0x01),
    Reg::new(0x40b9, 0x2c),
    Reg::new(0x40bc, 0x01),
    Reg::new(0x40bd, 0x18),
    Reg::new(0x40be, 0x00),
    Reg::new(0x40bf, 0x00),
    Reg::new(0x41a4, 0x00),
    Reg::new(0x5a09, 0x01),
    Reg::new(0x5a17, 0x01),
    Reg::new(0x5a25, 0x01),
    Reg::new(0x5a33, 0x01),
    Reg::new(0x98d7, 0xb4),
    Reg::new(0x98d8, 0x8c),
    Reg::new(0x98d9, 0x0a),
    Reg::new(0x99c4, 0x16),
    Reg::new(0x341a, 0x00),
    Reg::new(0x341b, 0x00),
    Reg::new(0x341c, 0x00),
    Reg::new(0x341d, 0x00),
    Reg::new(0x341e, 0x00),
    Reg::new(0x341f, 0x50),
    Reg::new(0x3420, 0x00),
    Reg::new(0x3421, 0x3c),
];

