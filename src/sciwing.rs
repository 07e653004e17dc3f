//! The sci-wing array variant.
//!
//! 793 RGB LEDs across 52 TLC5955 chips, arranged in concentric rings that
//! curve toward the sample plane at the rim (the outer rings sit closer,
//! hence their smaller `z`). Two trigger outputs, two trigger inputs.

use crate::position::LedPosition;
use crate::ArrayVariant;

/// Marker type for the sci-wing hardware build.
#[derive(Debug, Clone, Copy)]
pub struct SciWing;

impl crate::seal::Sealed for SciWing {}

impl ArrayVariant for SciWing {
    const NAME: &'static str = "sci-wing";
    const HARDWARE_REVISION: &'static str = "1.0";
    const LED_COUNT: u16 = 793;
    const CENTER_LED: u16 = 0;
    const BIT_DEPTH: u32 = 16;
    const COLOR_CHANNEL_WAVELENGTHS_UM: [f32; 3] = [0.48, 0.525, 0.625];
    const MAX_NA: f32 = 1.0;
    const CHIP_COUNT: u16 = 52;
    const TRIGGER_OUTPUT_COUNT: usize = 2;
    const TRIGGER_INPUT_COUNT: usize = 2;
    const DEFAULT_ARRAY_DISTANCE_Z_MM: f32 = 50.0;

    fn positions() -> &'static [LedPosition] {
        &SCI_WING_POSITIONS
    }
}

// Generated from the panel placement data.
// Columns: hole number, channel, 100*x, 100*y, 100*z.
#[rustfmt::skip]
static SCI_WING_POSITIONS: [LedPosition; 793] = [
    LedPosition::new(0, 90, 0, 0, 6500),
    LedPosition::new(1, 150, 0, 417, 6500),
    LedPosition::new(2, 108, 417, 0, 6500),
    LedPosition::new(3, 94, -417, 0, 6500),
    LedPosition::new(4, 91, 0, -417, 6500),
    LedPosition::new(5, 104, 417, -417, 6500),
    LedPosition::new(6, 95, -417, -417, 6500),
    LedPosition::new(7, 160, 417, 417, 6500),
    LedPosition::new(8, 146, -417, 417, 6500),
    LedPosition::new(9, 151, 0, 835, 6500),
    LedPosition::new(10, 109, 835, 0, 6500),
    LedPosition::new(11, 87, 0, -835, 6500),
    LedPosition::new(12, 93, -835, 0, 6500),
    LedPosition::new(13, 147, -417, 835, 6500),
    LedPosition::new(14, 161, 835, 417, 6500),
    LedPosition::new(15, 145, -835, 417, 6500),
    LedPosition::new(16, 164, 417, 835, 6500),
    LedPosition::new(17, 100, 417, -835, 6500),
    LedPosition::new(18, 83, -417, -835, 6500),
    LedPosition::new(19, 89, -835, -417, 6500),
    LedPosition::new(20, 105, 835, -417, 6500),
    LedPosition::new(21, 85, -835, -835, 6500),
    LedPosition::new(22, 101, 835, -835, 6500),
    LedPosition::new(23, 165, 835, 835, 6500),
    LedPosition::new(24, 149, -835, 835, 6500),
    LedPosition::new(25, 86, 0, -1252, 6500),
    LedPosition::new(26, 92, -1252, 0, 6500),
    LedPosition::new(27, 110, 1252, 0, 6500),
    LedPosition::new(28, 155, 0, 1252, 6500),
    LedPosition::new(29, 162, 1252, 417, 6500),
    LedPosition::new(30, 168, 417, 1252, 6500),
    LedPosition::new(31, 111, 1252, -417, 6500),
    LedPosition::new(32, 88, -1252, -417, 6500),
    LedPosition::new(33, 82, -417, -1252, 6500),
    LedPosition::new(34, 144, -1252, 417, 6500),
    LedPosition::new(35, 159, -417, 1252, 6500),
    LedPosition::new(36, 96, 417, -1252, 6500),
    LedPosition::new(37, 99, 1252, -835, 6500),
    LedPosition::new(38, 81, -835, -1252, 6500),
    LedPosition::new(39, 153, -835, 1252, 6500),
    LedPosition::new(40, 163, 1252, 835, 6500),
    LedPosition::new(41, 169, 835, 1252, 6500),
    LedPosition::new(42, 84, -1252, -835, 6500),
    LedPosition::new(43, 97, 835, -1252, 6500),
    LedPosition::new(44, 148, -1252, 835, 6500),
    LedPosition::new(45, 74, -1669, 0, 6500),
    LedPosition::new(46, 154, 0, 1669, 6500),
    LedPosition::new(47, 26, 0, -1669, 6500),
    LedPosition::new(48, 106, 1669, 0, 6500),
    LedPosition::new(49, 158, -417, 1669, 6500),
    LedPosition::new(50, 172, 417, 1669, 6500),
    LedPosition::new(51, 107, 1669, -417, 6500),
    LedPosition::new(52, 134, -1669, 417, 6500),
    LedPosition::new(53, 44, 417, -1669, 6500),
    LedPosition::new(54, 30, -417, -1669, 6500),
    LedPosition::new(55, 166, 1669, 417, 6500),
    LedPosition::new(56, 75, -1669, -417, 6500),
    LedPosition::new(57, 152, -1252, 1252, 6500),
    LedPosition::new(58, 98, 1252, -1252, 6500),
    LedPosition::new(59, 80, -1252, -1252, 6500),
    LedPosition::new(60, 175, 1252, 1252, 6500),
    LedPosition::new(61, 157, -835, 1669, 6500),
    LedPosition::new(62, 71, -1669, -835, 6500),
    LedPosition::new(63, 173, 835, 1669, 6500),
    LedPosition::new(64, 135, -1669, 835, 6500),
    LedPosition::new(65, 167, 1669, 835, 6500),
    LedPosition::new(66, 45, 835, -1669, 6500),
    LedPosition::new(67, 103, 1669, -835, 6500),
    LedPosition::new(68, 29, -835, -1669, 6500),
    LedPosition::new(69, 214, 0, 2087, 6500),
    LedPosition::new(70, 124, 2087, 0, 6500),
    LedPosition::new(71, 78, -2087, 0, 6500),
    LedPosition::new(72, 27, 0, -2087, 6500),
    LedPosition::new(73, 139, -1669, 1252, 6500),
    LedPosition::new(74, 28, -1252, -1669, 6500),
    LedPosition::new(75, 171, 1669, 1252, 6500),
    LedPosition::new(76, 156, -1252, 1669, 6500),
    LedPosition::new(77, 102, 1669, -1252, 6500),
    LedPosition::new(78, 174, 1252, 1669, 6500),
    LedPosition::new(79, 46, 1252, -1669, 6500),
    LedPosition::new(80, 70, -1669, -1252, 6500),
    LedPosition::new(81, 130, -2087, 417, 6500),
    LedPosition::new(82, 40, 417, -2087, 6500),
    LedPosition::new(83, 120, 2087, -417, 6500),
    LedPosition::new(84, 210, -417, 2087, 6500),
    LedPosition::new(85, 176, 2087, 417, 6500),
    LedPosition::new(86, 224, 417, 2087, 6500),
    LedPosition::new(87, 79, -2087, -417, 6500),
    LedPosition::new(88, 31, -417, -2087, 6500),
    LedPosition::new(89, 209, -835, 2087, 6500),
    LedPosition::new(90, 116, 2087, -835, 6500),
    LedPosition::new(91, 67, -2087, -835, 6500),
    LedPosition::new(92, 41, 835, -2087, 6500),
    LedPosition::new(93, 225, 835, 2087, 6500),
    LedPosition::new(94, 180, 2087, 835, 6500),
    LedPosition::new(95, 131, -2087, 835, 6500),
    LedPosition::new(96, 25, -835, -2087, 6500),
    LedPosition::new(97, 10, -1669, -1669, 6500),
    LedPosition::new(98, 170, 1669, 1669, 6500),
    LedPosition::new(99, 138, -1669, 1669, 6500),
    LedPosition::new(100, 42, 1669, -1669, 6500),
    LedPosition::new(101, 226, 1252, 2087, 6500),
    LedPosition::new(102, 112, 2087, -1252, 6500),
    LedPosition::new(103, 47, 1252, -2087, 6500),
    LedPosition::new(104, 24, -1252, -2087, 6500),
    LedPosition::new(105, 184, 2087, 1252, 6500),
    LedPosition::new(106, 208, -1252, 2087, 6500),
    LedPosition::new(107, 143, -2087, 1252, 6500),
    LedPosition::new(108, 66, -2087, -1252, 6500),
    LedPosition::new(109, 23, 0, -2504, 6500),
    LedPosition::new(110, 77, -2504, 0, 6500),
    LedPosition::new(111, 125, 2504, 0, 6500),
    LedPosition::new(112, 215, 0, 2504, 6500),
    LedPosition::new(113, 228, 417, 2504, 6500),
    LedPosition::new(114, 129, -2504, 417, 6500),
    LedPosition::new(115, 19, -417, -2504, 6500),
    LedPosition::new(116, 177, 2504, 417, 6500),
    LedPosition::new(117, 73, -2504, -417, 6500),
    LedPosition::new(118, 121, 2504, -417, 6500),
    LedPosition::new(119, 211, -417, 2504, 6500),
    LedPosition::new(120, 36, 417, -2504, 6500),
    LedPosition::new(121, 181, 2504, 835, 6500),
    LedPosition::new(122, 37, 835, -2504, 6500),
    LedPosition::new(123, 213, -835, 2504, 6500),
    LedPosition::new(124, 229, 835, 2504, 6500),
    LedPosition::new(125, 21, -835, -2504, 6500),
    LedPosition::new(126, 133, -2504, 835, 6500),
    LedPosition::new(127, 69, -2504, -835, 6500),
    LedPosition::new(128, 117, 2504, -835, 6500),
    LedPosition::new(129, 14, -2087, -1669, 6500),
    LedPosition::new(130, 230, 1669, 2087, 6500),
    LedPosition::new(131, 11, -1669, -2087, 6500),
    LedPosition::new(132, 60, 2087, -1669, 6500),
    LedPosition::new(133, 188, 2087, 1669, 6500),
    LedPosition::new(134, 198, -1669, 2087, 6500),
    LedPosition::new(135, 142, -2087, 1669, 6500),
    LedPosition::new(136, 43, 1669, -2087, 6500),
    LedPosition::new(137, 227, 1252, 2504, 6500),
    LedPosition::new(138, 212, -1252, 2504, 6500),
    LedPosition::new(139, 35, 1252, -2504, 6500),
    LedPosition::new(140, 65, -2504, -1252, 6500),
    LedPosition::new(141, 20, -1252, -2504, 6500),
    LedPosition::new(142, 137, -2504, 1252, 6500),
    LedPosition::new(143, 185, 2504, 1252, 6500),
    LedPosition::new(144, 113, 2504, -1252, 6500),
    LedPosition::new(145, 219, 0, 2921, 6500),
    LedPosition::new(146, 22, 0, -2921, 6500),
    LedPosition::new(147, 126, 2921, 0, 6500),
    LedPosition::new(148, 76, -2921, 0, 6500),
    LedPosition::new(149, 194, -2087, 2087, 6500),
    LedPosition::new(150, 240, 2087, 2087, 6500),
    LedPosition::new(151, 56, 2087, -2087, 6500),
    LedPosition::new(152, 15, -2087, -2087, 6500),
    LedPosition::new(153, 223, -417, 2921, 6500),
    LedPosition::new(154, 232, 417, 2921, 6500),
    LedPosition::new(155, 18, -417, -2921, 6500),
    LedPosition::new(156, 72, -2921, -417, 6500),
    LedPosition::new(157, 178, 2921, 417, 6500),
    LedPosition::new(158, 32, 417, -2921, 6500),
    LedPosition::new(159, 127, 2921, -417, 6500),
    LedPosition::new(160, 128, -2921, 417, 6500),
    LedPosition::new(161, 199, -1669, 2504, 6500),
    LedPosition::new(162, 13, -2504, -1669, 6500),
    LedPosition::new(163, 39, 1669, -2504, 6500),
    LedPosition::new(164, 189, 2504, 1669, 6500),
    LedPosition::new(165, 231, 1669, 2504, 6500),
    LedPosition::new(166, 7, -1669, -2504, 6500),
    LedPosition::new(167, 141, -2504, 1669, 6500),
    LedPosition::new(168, 61, 2504, -1669, 6500),
    LedPosition::new(169, 179, 2921, 835, 6500),
    LedPosition::new(170, 132, -2921, 835, 6500),
    LedPosition::new(171, 115, 2921, -835, 6500),
    LedPosition::new(172, 233, 835, 2921, 6500),
    LedPosition::new(173, 33, 835, -2921, 6500),
    LedPosition::new(174, 68, -2921, -835, 6500),
    LedPosition::new(175, 217, -835, 2921, 6500),
    LedPosition::new(176, 17, -835, -2921, 6500),
    LedPosition::new(177, 761, 3051, 217, 6353),
    LedPosition::new(178, 766, 3051, -218, 6353),
    LedPosition::new(179, 329, -218, 3051, 6353),
    LedPosition::new(180, 622, -218, -3051, 6353),
    LedPosition::new(181, 473, -3051, -217, 6353),
    LedPosition::new(182, 617, 217, -3051, 6353),
    LedPosition::new(183, 334, 218, 3051, 6353),
    LedPosition::new(184, 478, -3051, 218, 6353),
    LedPosition::new(185, 191, 2921, 1252, 6500),
    LedPosition::new(186, 216, -1252, 2921, 6500),
    LedPosition::new(187, 136, -2921, 1252, 6500),
    LedPosition::new(188, 34, 1252, -2921, 6500),
    LedPosition::new(189, 64, -2921, -1252, 6500),
    LedPosition::new(190, 114, 2921, -1252, 6500),
    LedPosition::new(191, 239, 1252, 2921, 6500),
    LedPosition::new(192, 16, -1252, -2921, 6500),
    LedPosition::new(193, 330, 652, 3051, 6353),
    LedPosition::new(194, 476, -3051, -652, 6353),
    LedPosition::new(195, 474, -3051, 653, 6353),
    LedPosition::new(196, 764, 3051, 652, 6353),
    LedPosition::new(197, 332, -652, 3051, 6353),
    LedPosition::new(198, 620, 652, -3051, 6353),
    LedPosition::new(199, 762, 3051, -653, 6353),
    LedPosition::new(200, 618, -653, -3051, 6353),
    LedPosition::new(201, 193, -2504, 2087, 6500),
    LedPosition::new(202, 52, 2087, -2504, 6500),
    LedPosition::new(203, 195, -2087, 2504, 6500),
    LedPosition::new(204, 9, -2504, -2087, 6500),
    LedPosition::new(205, 57, 2504, -2087, 6500),
    LedPosition::new(206, 241, 2504, 2087, 6500),
    LedPosition::new(207, 3, -2087, -2504, 6500),
    LedPosition::new(208, 244, 2087, 2504, 6500),
    LedPosition::new(209, 314, -1088, 3051, 6353),
    LedPosition::new(210, 746, 3051, 1087, 6353),
    LedPosition::new(211, 458, -3051, -1087, 6353),
    LedPosition::new(212, 348, 1088, 3051, 6353),
    LedPosition::new(213, 780, 3051, -1088, 6353),
    LedPosition::new(214, 602, 1087, -3051, 6353),
    LedPosition::new(215, 636, -1088, -3051, 6353),
    LedPosition::new(216, 492, -3051, 1088, 6353),
    LedPosition::new(217, 62, 2921, -1669, 6500),
    LedPosition::new(218, 203, -1669, 2921, 6500),
    LedPosition::new(219, 12, -2921, -1669, 6500),
    LedPosition::new(220, 6, -1669, -2921, 6500),
    LedPosition::new(221, 38, 1669, -2921, 6500),
    LedPosition::new(222, 190, 2921, 1669, 6500),
    LedPosition::new(223, 235, 1669, 2921, 6500),
    LedPosition::new(224, 140, -2921, 1669, 6500),
    LedPosition::new(225, 633, -1523, -3051, 6353),
    LedPosition::new(226, 462, -3051, -1522, 6353),
    LedPosition::new(227, 777, 3051, -1523, 6353),
    LedPosition::new(228, 606, 1522, -3051, 6353),
    LedPosition::new(229, 750, 3051, 1522, 6353),
    LedPosition::new(230, 318, -1523, 3051, 6353),
    LedPosition::new(231, 345, 1523, 3051, 6353),
    LedPosition::new(232, 489, -3051, 1523, 6353),
    LedPosition::new(233, 477, -3268, 0, 6045),
    LedPosition::new(234, 765, 3268, 0, 6045),
    LedPosition::new(235, 621, 0, -3268, 6045),
    LedPosition::new(236, 333, 0, 3268, 6045),
    LedPosition::new(237, 5, -2504, -2504, 6500),
    LedPosition::new(238, 197, -2504, 2504, 6500),
    LedPosition::new(239, 245, 2504, 2504, 6500),
    LedPosition::new(240, 53, 2504, -2504, 6500),
    LedPosition::new(241, 623, -435, -3268, 6045),
    LedPosition::new(242, 335, 435, 3268, 6045),
    LedPosition::new(243, 472, -3268, -435, 6045),
    LedPosition::new(244, 760, 3268, 435, 6045),
    LedPosition::new(245, 479, -3268, 435, 6045),
    LedPosition::new(246, 328, -435, 3268, 6045),
    LedPosition::new(247, 616, 435, -3268, 6045),
    LedPosition::new(248, 767, 3268, -435, 6045),
    LedPosition::new(249, 248, 2087, 2921, 6500),
    LedPosition::new(250, 242, 2921, 2087, 6500),
    LedPosition::new(251, 192, -2921, 2087, 6500),
    LedPosition::new(252, 63, 2921, -2087, 6500),
    LedPosition::new(253, 48, 2087, -2921, 6500),
    LedPosition::new(254, 8, -2921, -2087, 6500),
    LedPosition::new(255, 2, -2087, -2921, 6500),
    LedPosition::new(256, 207, -2087, 2921, 6500),
    LedPosition::new(257, 315, -870, 3268, 6045),
    LedPosition::new(258, 747, 3268, 870, 6045),
    LedPosition::new(259, 331, 870, 3268, 6045),
    LedPosition::new(260, 459, -3268, -870, 6045),
    LedPosition::new(261, 603, 870, -3268, 6045),
    LedPosition::new(262, 475, -3268, 870, 6045),
    LedPosition::new(263, 763, 3268, -870, 6045),
    LedPosition::new(264, 619, -870, -3268, 6045),
    LedPosition::new(265, 457, -3051, -1958, 6353),
    LedPosition::new(266, 745, 3051, 1957, 6353),
    LedPosition::new(267, 313, -1958, 3051, 6353),
    LedPosition::new(268, 601, 1958, -3051, 6353),
    LedPosition::new(269, 782, 3051, -1958, 6353),
    LedPosition::new(270, 638, -1958, -3051, 6353),
    LedPosition::new(271, 350, 1958, 3051, 6353),
    LedPosition::new(272, 494, -3051, 1958, 6353),
    LedPosition::new(273, 751, 3268, 1305, 6045),
    LedPosition::new(274, 463, -3268, -1305, 6045),
    LedPosition::new(275, 344, 1305, 3268, 6045),
    LedPosition::new(276, 488, -3268, 1305, 6045),
    LedPosition::new(277, 607, 1305, -3268, 6045),
    LedPosition::new(278, 319, -1305, 3268, 6045),
    LedPosition::new(279, 776, 3268, -1305, 6045),
    LedPosition::new(280, 632, -1305, -3268, 6045),
    LedPosition::new(281, 201, -2504, 2921, 6500),
    LedPosition::new(282, 196, -2921, 2504, 6500),
    LedPosition::new(283, 4, -2921, -2504, 6500),
    LedPosition::new(284, 243, 2921, 2504, 6500),
    LedPosition::new(285, 51, 2921, -2504, 6500),
    LedPosition::new(286, 249, 2504, 2921, 6500),
    LedPosition::new(287, 1, -2504, -2921, 6500),
    LedPosition::new(288, 49, 2504, -2921, 6500),
    LedPosition::new(289, 614, -218, -3486, 5738),
    LedPosition::new(290, 608, 217, -3486, 5738),
    LedPosition::new(291, 752, 3486, 217, 5738),
    LedPosition::new(292, 758, 3486, -218, 5738),
    LedPosition::new(293, 464, -3486, -217, 5738),
    LedPosition::new(294, 470, -3486, 218, 5738),
    LedPosition::new(295, 326, 218, 3486, 5738),
    LedPosition::new(296, 320, -218, 3486, 5738),
    LedPosition::new(297, 460, -3051, -2392, 6353),
    LedPosition::new(298, 604, 2392, -3051, 6353),
    LedPosition::new(299, 778, 3051, -2393, 6353),
    LedPosition::new(300, 748, 3051, 2392, 6353),
    LedPosition::new(301, 346, 2393, 3051, 6353),
    LedPosition::new(302, 316, -2393, 3051, 6353),
    LedPosition::new(303, 490, -3051, 2393, 6353),
    LedPosition::new(304, 634, -2393, -3051, 6353),
    LedPosition::new(305, 749, 3268, 1740, 6045),
    LedPosition::new(306, 605, 1740, -3268, 6045),
    LedPosition::new(307, 461, -3268, -1740, 6045),
    LedPosition::new(308, 781, 3268, -1740, 6045),
    LedPosition::new(309, 637, -1740, -3268, 6045),
    LedPosition::new(310, 349, 1740, 3268, 6045),
    LedPosition::new(311, 493, -3268, 1740, 6045),
    LedPosition::new(312, 317, -1740, 3268, 6045),
    LedPosition::new(313, 468, -3486, -652, 5738),
    LedPosition::new(314, 324, -652, 3486, 5738),
    LedPosition::new(315, 615, -653, -3486, 5738),
    LedPosition::new(316, 612, 652, -3486, 5738),
    LedPosition::new(317, 759, 3486, -653, 5738),
    LedPosition::new(318, 756, 3486, 652, 5738),
    LedPosition::new(319, 327, 652, 3486, 5738),
    LedPosition::new(320, 471, -3486, 653, 5738),
    LedPosition::new(321, 255, 2921, 2921, 6500),
    LedPosition::new(322, 200, -2921, 2921, 6500),
    LedPosition::new(323, 50, 2921, -2921, 6500),
    LedPosition::new(324, 0, -2921, -2921, 6500),
    LedPosition::new(325, 743, 3486, 1087, 5738),
    LedPosition::new(326, 599, 1087, -3486, 5738),
    LedPosition::new(327, 772, 3486, -1088, 5738),
    LedPosition::new(328, 311, -1088, 3486, 5738),
    LedPosition::new(329, 484, -3486, 1088, 5738),
    LedPosition::new(330, 340, 1088, 3486, 5738),
    LedPosition::new(331, 455, -3486, -1087, 5738),
    LedPosition::new(332, 628, -1088, -3486, 5738),
    LedPosition::new(333, 783, 3268, -2175, 6045),
    LedPosition::new(334, 600, 2175, -3268, 6045),
    LedPosition::new(335, 456, -3268, -2175, 6045),
    LedPosition::new(336, 639, -2175, -3268, 6045),
    LedPosition::new(337, 351, 2175, 3268, 6045),
    LedPosition::new(338, 495, -3268, 2175, 6045),
    LedPosition::new(339, 744, 3268, 2175, 6045),
    LedPosition::new(340, 312, -2175, 3268, 6045),
    LedPosition::new(341, 510, -3051, -2828, 6353),
    LedPosition::new(342, 798, 3051, 2828, 6353),
    LedPosition::new(343, 396, 2828, 3051, 6353),
    LedPosition::new(344, 366, -2828, 3051, 6353),
    LedPosition::new(345, 540, -3051, 2828, 6353),
    LedPosition::new(346, 828, 3051, -2828, 6353),
    LedPosition::new(347, 654, 2828, -3051, 6353),
    LedPosition::new(348, 684, -2828, -3051, 6353),
    LedPosition::new(349, 742, 3486, 1522, 5738),
    LedPosition::new(350, 454, -3486, -1522, 5738),
    LedPosition::new(351, 310, -1523, 3486, 5738),
    LedPosition::new(352, 768, 3486, -1523, 5738),
    LedPosition::new(353, 480, -3486, 1523, 5738),
    LedPosition::new(354, 336, 1523, 3486, 5738),
    LedPosition::new(355, 624, -1523, -3486, 5738),
    LedPosition::new(356, 598, 1522, -3486, 5738),
    LedPosition::new(357, 465, -3703, 0, 5430),
    LedPosition::new(358, 609, 0, -3703, 5430),
    LedPosition::new(359, 753, 3703, 0, 5430),
    LedPosition::new(360, 321, 0, 3703, 5430),
    LedPosition::new(361, 469, -3703, -435, 5430),
    LedPosition::new(362, 754, 3703, -435, 5430),
    LedPosition::new(363, 322, 435, 3703, 5430),
    LedPosition::new(364, 757, 3703, 435, 5430),
    LedPosition::new(365, 610, -435, -3703, 5430),
    LedPosition::new(366, 466, -3703, 435, 5430),
    LedPosition::new(367, 325, -435, 3703, 5430),
    LedPosition::new(368, 613, 435, -3703, 5430),
    LedPosition::new(369, 651, 2610, -3268, 6045),
    LedPosition::new(370, 507, -3268, -2610, 6045),
    LedPosition::new(371, 347, 2610, 3268, 6045),
    LedPosition::new(372, 363, -2610, 3268, 6045),
    LedPosition::new(373, 491, -3268, 2610, 6045),
    LedPosition::new(374, 635, -2610, -3268, 6045),
    LedPosition::new(375, 779, 3268, -2610, 6045),
    LedPosition::new(376, 795, 3268, 2610, 6045),
    LedPosition::new(377, 448, -3486, -1958, 5738),
    LedPosition::new(378, 592, 1958, -3486, 5738),
    LedPosition::new(379, 486, -3486, 1958, 5738),
    LedPosition::new(380, 736, 3486, 1957, 5738),
    LedPosition::new(381, 342, 1958, 3486, 5738),
    LedPosition::new(382, 630, -1958, -3486, 5738),
    LedPosition::new(383, 774, 3486, -1958, 5738),
    LedPosition::new(384, 304, -1958, 3486, 5738),
    LedPosition::new(385, 323, 870, 3703, 5430),
    LedPosition::new(386, 467, -3703, 870, 5430),
    LedPosition::new(387, 755, 3703, -870, 5430),
    LedPosition::new(388, 451, -3703, -870, 5430),
    LedPosition::new(389, 307, -870, 3703, 5430),
    LedPosition::new(390, 595, 870, -3703, 5430),
    LedPosition::new(391, 739, 3703, 870, 5430),
    LedPosition::new(392, 611, -870, -3703, 5430),
    LedPosition::new(393, 485, -3703, 1305, 5430),
    LedPosition::new(394, 306, -1305, 3703, 5430),
    LedPosition::new(395, 629, -1305, -3703, 5430),
    LedPosition::new(396, 341, 1305, 3703, 5430),
    LedPosition::new(397, 450, -3703, -1305, 5430),
    LedPosition::new(398, 738, 3703, 1305, 5430),
    LedPosition::new(399, 594, 1305, -3703, 5430),
    LedPosition::new(400, 773, 3703, -1305, 5430),
    LedPosition::new(401, 775, 3486, -2393, 5738),
    LedPosition::new(402, 343, 2393, 3486, 5738),
    LedPosition::new(403, 596, 2392, -3486, 5738),
    LedPosition::new(404, 308, -2393, 3486, 5738),
    LedPosition::new(405, 452, -3486, -2392, 5738),
    LedPosition::new(406, 740, 3486, 2392, 5738),
    LedPosition::new(407, 631, -2393, -3486, 5738),
    LedPosition::new(408, 487, -3486, 2393, 5738),
    LedPosition::new(409, 537, -3268, 3045, 6045),
    LedPosition::new(410, 825, 3268, -3045, 6045),
    LedPosition::new(411, 393, 3045, 3268, 6045),
    LedPosition::new(412, 681, -3045, -3268, 6045),
    LedPosition::new(413, 797, 3268, 3045, 6045),
    LedPosition::new(414, 509, -3268, -3045, 6045),
    LedPosition::new(415, 653, 3045, -3268, 6045),
    LedPosition::new(416, 365, -3045, 3268, 6045),
    LedPosition::new(417, 449, -3703, -1740, 5430),
    LedPosition::new(418, 305, -1740, 3703, 5430),
    LedPosition::new(419, 625, -1740, -3703, 5430),
    LedPosition::new(420, 737, 3703, 1740, 5430),
    LedPosition::new(421, 593, 1740, -3703, 5430),
    LedPosition::new(422, 481, -3703, 1740, 5430),
    LedPosition::new(423, 337, 1740, 3703, 5430),
    LedPosition::new(424, 769, 3703, -1740, 5430),
    LedPosition::new(425, 286, 218, 3921, 5123),
    LedPosition::new(426, 713, 3921, 217, 5123),
    LedPosition::new(427, 430, -3921, 218, 5123),
    LedPosition::new(428, 281, -218, 3921, 5123),
    LedPosition::new(429, 569, 217, -3921, 5123),
    LedPosition::new(430, 425, -3921, -217, 5123),
    LedPosition::new(431, 718, 3921, -218, 5123),
    LedPosition::new(432, 574, -218, -3921, 5123),
    LedPosition::new(433, 572, 652, -3921, 5123),
    LedPosition::new(434, 714, 3921, -653, 5123),
    LedPosition::new(435, 428, -3921, -652, 5123),
    LedPosition::new(436, 282, 652, 3921, 5123),
    LedPosition::new(437, 570, -653, -3921, 5123),
    LedPosition::new(438, 716, 3921, 652, 5123),
    LedPosition::new(439, 284, -652, 3921, 5123),
    LedPosition::new(440, 426, -3921, 653, 5123),
    LedPosition::new(441, 676, -2828, -3486, 5738),
    LedPosition::new(442, 820, 3486, -2828, 5738),
    LedPosition::new(443, 367, -2828, 3486, 5738),
    LedPosition::new(444, 388, 2828, 3486, 5738),
    LedPosition::new(445, 655, 2828, -3486, 5738),
    LedPosition::new(446, 511, -3486, -2828, 5738),
    LedPosition::new(447, 532, -3486, 2828, 5738),
    LedPosition::new(448, 799, 3486, 2828, 5738),
    LedPosition::new(449, 309, -2175, 3703, 5430),
    LedPosition::new(450, 626, -2175, -3703, 5430),
    LedPosition::new(451, 338, 2175, 3703, 5430),
    LedPosition::new(452, 482, -3703, 2175, 5430),
    LedPosition::new(453, 597, 2175, -3703, 5430),
    LedPosition::new(454, 770, 3703, -2175, 5430),
    LedPosition::new(455, 453, -3703, -2175, 5430),
    LedPosition::new(456, 741, 3703, 2175, 5430),
    LedPosition::new(457, 554, 1087, -3921, 5123),
    LedPosition::new(458, 698, 3921, 1087, 5123),
    LedPosition::new(459, 300, 1088, 3921, 5123),
    LedPosition::new(460, 410, -3921, -1087, 5123),
    LedPosition::new(461, 266, -1088, 3921, 5123),
    LedPosition::new(462, 588, -1088, -3921, 5123),
    LedPosition::new(463, 732, 3921, -1088, 5123),
    LedPosition::new(464, 444, -3921, 1088, 5123),
    LedPosition::new(465, 585, -1523, -3921, 5123),
    LedPosition::new(466, 729, 3921, -1523, 5123),
    LedPosition::new(467, 441, -3921, 1523, 5123),
    LedPosition::new(468, 270, -1523, 3921, 5123),
    LedPosition::new(469, 558, 1522, -3921, 5123),
    LedPosition::new(470, 414, -3921, -1522, 5123),
    LedPosition::new(471, 297, 1523, 3921, 5123),
    LedPosition::new(472, 702, 3921, 1522, 5123),
    LedPosition::new(473, 686, -3263, -3486, 5738),
    LedPosition::new(474, 364, -3263, 3486, 5738),
    LedPosition::new(475, 398, 3263, 3486, 5738),
    LedPosition::new(476, 830, 3486, -3263, 5738),
    LedPosition::new(477, 542, -3486, 3263, 5738),
    LedPosition::new(478, 508, -3486, -3263, 5738),
    LedPosition::new(479, 796, 3486, 3262, 5738),
    LedPosition::new(480, 652, 3262, -3486, 5738),
    LedPosition::new(481, 627, -2610, -3703, 5430),
    LedPosition::new(482, 483, -3703, 2610, 5430),
    LedPosition::new(483, 498, -3703, -2610, 5430),
    LedPosition::new(484, 354, -2610, 3703, 5430),
    LedPosition::new(485, 642, 2610, -3703, 5430),
    LedPosition::new(486, 339, 2610, 3703, 5430),
    LedPosition::new(487, 786, 3703, 2610, 5430),
    LedPosition::new(488, 771, 3703, -2610, 5430),
    LedPosition::new(489, 409, -3921, -1958, 5123),
    LedPosition::new(490, 590, -1958, -3921, 5123),
    LedPosition::new(491, 302, 1958, 3921, 5123),
    LedPosition::new(492, 553, 1958, -3921, 5123),
    LedPosition::new(493, 265, -1958, 3921, 5123),
    LedPosition::new(494, 697, 3921, 1957, 5123),
    LedPosition::new(495, 446, -3921, 1958, 5123),
    LedPosition::new(496, 734, 3921, -1958, 5123),
    LedPosition::new(497, 717, 4138, 0, 4815),
    LedPosition::new(498, 285, 0, 4138, 4815),
    LedPosition::new(499, 429, -4138, 0, 4815),
    LedPosition::new(500, 573, 0, -4138, 4815),
    LedPosition::new(501, 280, -435, 4138, 4815),
    LedPosition::new(502, 712, 4138, 435, 4815),
    LedPosition::new(503, 719, 4138, -435, 4815),
    LedPosition::new(504, 568, 435, -4138, 4815),
    LedPosition::new(505, 575, -435, -4138, 4815),
    LedPosition::new(506, 287, 435, 4138, 4815),
    LedPosition::new(507, 424, -4138, -435, 4815),
    LedPosition::new(508, 431, -4138, 435, 4815),
    LedPosition::new(509, 699, 4138, 870, 4815),
    LedPosition::new(510, 571, -870, -4138, 4815),
    LedPosition::new(511, 267, -870, 4138, 4815),
    LedPosition::new(512, 283, 870, 4138, 4815),
    LedPosition::new(513, 555, 870, -4138, 4815),
    LedPosition::new(514, 411, -4138, -870, 4815),
    LedPosition::new(515, 715, 4138, -870, 4815),
    LedPosition::new(516, 427, -4138, 870, 4815),
    LedPosition::new(517, 392, 3045, 3703, 5430),
    LedPosition::new(518, 536, -3703, 3045, 5430),
    LedPosition::new(519, 506, -3703, -3045, 5430),
    LedPosition::new(520, 362, -3045, 3703, 5430),
    LedPosition::new(521, 650, 3045, -3703, 5430),
    LedPosition::new(522, 680, -3045, -3703, 5430),
    LedPosition::new(523, 794, 3703, 3045, 5430),
    LedPosition::new(524, 824, 3703, -3045, 5430),
    LedPosition::new(525, 268, -2393, 3921, 5123),
    LedPosition::new(526, 442, -3921, 2393, 5123),
    LedPosition::new(527, 298, 2393, 3921, 5123),
    LedPosition::new(528, 586, -2393, -3921, 5123),
    LedPosition::new(529, 730, 3921, -2393, 5123),
    LedPosition::new(530, 412, -3921, -2392, 5123),
    LedPosition::new(531, 700, 3921, 2392, 5123),
    LedPosition::new(532, 556, 2392, -3921, 5123),
    LedPosition::new(533, 703, 4138, 1305, 4815),
    LedPosition::new(534, 415, -4138, -1305, 4815),
    LedPosition::new(535, 296, 1305, 4138, 4815),
    LedPosition::new(536, 440, -4138, 1305, 4815),
    LedPosition::new(537, 584, -1305, -4138, 4815),
    LedPosition::new(538, 559, 1305, -4138, 4815),
    LedPosition::new(539, 271, -1305, 4138, 4815),
    LedPosition::new(540, 728, 4138, -1305, 4815),
    LedPosition::new(541, 301, 1740, 4138, 4815),
    LedPosition::new(542, 733, 4138, -1740, 4815),
    LedPosition::new(543, 589, -1740, -4138, 4815),
    LedPosition::new(544, 445, -4138, 1740, 4815),
    LedPosition::new(545, 269, -1740, 4138, 4815),
    LedPosition::new(546, 557, 1740, -4138, 4815),
    LedPosition::new(547, 413, -4138, -1740, 4815),
    LedPosition::new(548, 701, 4138, 1740, 4815),
    LedPosition::new(549, 399, 3480, 3703, 5430),
    LedPosition::new(550, 356, -3480, 3703, 5430),
    LedPosition::new(551, 644, 3480, -3703, 5430),
    LedPosition::new(552, 543, -3703, 3480, 5430),
    LedPosition::new(553, 500, -3703, -3480, 5430),
    LedPosition::new(554, 788, 3703, 3480, 5430),
    LedPosition::new(555, 831, 3703, -3480, 5430),
    LedPosition::new(556, 687, -3480, -3703, 5430),
    LedPosition::new(557, 502, -3921, -2828, 5123),
    LedPosition::new(558, 790, 3921, 2828, 5123),
    LedPosition::new(559, 646, 2828, -3921, 5123),
    LedPosition::new(560, 817, 3921, -2828, 5123),
    LedPosition::new(561, 673, -2828, -3921, 5123),
    LedPosition::new(562, 385, 2828, 3921, 5123),
    LedPosition::new(563, 529, -3921, 2828, 5123),
    LedPosition::new(564, 358, -2828, 3921, 5123),
    LedPosition::new(565, 710, 4356, -218, 4508),
    LedPosition::new(566, 422, -4356, 218, 4508),
    LedPosition::new(567, 278, 218, 4356, 4508),
    LedPosition::new(568, 566, -218, -4356, 4508),
    LedPosition::new(569, 272, -218, 4356, 4508),
    LedPosition::new(570, 416, -4356, -217, 4508),
    LedPosition::new(571, 560, 217, -4356, 4508),
    LedPosition::new(572, 704, 4356, 217, 4508),
    LedPosition::new(573, 264, -2175, 4138, 4815),
    LedPosition::new(574, 552, 2175, -4138, 4815),
    LedPosition::new(575, 408, -4138, -2175, 4815),
    LedPosition::new(576, 303, 2175, 4138, 4815),
    LedPosition::new(577, 447, -4138, 2175, 4815),
    LedPosition::new(578, 591, -2175, -4138, 4815),
    LedPosition::new(579, 696, 4138, 2175, 4815),
    LedPosition::new(580, 735, 4138, -2175, 4815),
    LedPosition::new(581, 279, 652, 4356, 4508),
    LedPosition::new(582, 276, -652, 4356, 4508),
    LedPosition::new(583, 711, 4356, -653, 4508),
    LedPosition::new(584, 423, -4356, 653, 4508),
    LedPosition::new(585, 420, -4356, -652, 4508),
    LedPosition::new(586, 567, -653, -4356, 4508),
    LedPosition::new(587, 708, 4356, 652, 4508),
    LedPosition::new(588, 564, 652, -4356, 4508),
    LedPosition::new(589, 685, -3263, -3921, 5123),
    LedPosition::new(590, 829, 3921, -3263, 5123),
    LedPosition::new(591, 649, 3262, -3921, 5123),
    LedPosition::new(592, 793, 3921, 3262, 5123),
    LedPosition::new(593, 505, -3921, -3263, 5123),
    LedPosition::new(594, 397, 3263, 3921, 5123),
    LedPosition::new(595, 361, -3263, 3921, 5123),
    LedPosition::new(596, 541, -3921, 3263, 5123),
    LedPosition::new(597, 695, 4356, 1087, 4508),
    LedPosition::new(598, 551, 1087, -4356, 4508),
    LedPosition::new(599, 580, -1088, -4356, 4508),
    LedPosition::new(600, 263, -1088, 4356, 4508),
    LedPosition::new(601, 292, 1088, 4356, 4508),
    LedPosition::new(602, 724, 4356, -1088, 4508),
    LedPosition::new(603, 436, -4356, 1088, 4508),
    LedPosition::new(604, 407, -4356, -1087, 4508),
    LedPosition::new(605, 809, 4138, 2610, 4815),
    LedPosition::new(606, 587, -2610, -4138, 4815),
    LedPosition::new(607, 731, 4138, -2610, 4815),
    LedPosition::new(608, 443, -4138, 2610, 4815),
    LedPosition::new(609, 377, -2610, 4138, 4815),
    LedPosition::new(610, 299, 2610, 4138, 4815),
    LedPosition::new(611, 665, 2610, -4138, 4815),
    LedPosition::new(612, 521, -4138, -2610, 4815),
    LedPosition::new(613, 576, -1523, -4356, 4508),
    LedPosition::new(614, 550, 1522, -4356, 4508),
    LedPosition::new(615, 406, -4356, -1522, 4508),
    LedPosition::new(616, 288, 1523, 4356, 4508),
    LedPosition::new(617, 262, -1523, 4356, 4508),
    LedPosition::new(618, 694, 4356, 1522, 4508),
    LedPosition::new(619, 720, 4356, -1523, 4508),
    LedPosition::new(620, 432, -4356, 1523, 4508),
    LedPosition::new(621, 784, 3921, 3698, 5123),
    LedPosition::new(622, 827, 3921, -3698, 5123),
    LedPosition::new(623, 395, 3698, 3921, 5123),
    LedPosition::new(624, 539, -3921, 3698, 5123),
    LedPosition::new(625, 496, -3921, -3698, 5123),
    LedPosition::new(626, 683, -3698, -3921, 5123),
    LedPosition::new(627, 640, 3698, -3921, 5123),
    LedPosition::new(628, 352, -3698, 3921, 5123),
    LedPosition::new(629, 256, -1958, 4356, 4508),
    LedPosition::new(630, 400, -4356, -1958, 4508),
    LedPosition::new(631, 726, 4356, -1958, 4508),
    LedPosition::new(632, 544, 1957, -4356, 4508),
    LedPosition::new(633, 688, 4356, 1957, 4508),
    LedPosition::new(634, 294, 1958, 4356, 4508),
    LedPosition::new(635, 582, -1958, -4356, 4508),
    LedPosition::new(636, 438, -4356, 1958, 4508),
    LedPosition::new(637, 533, -4138, 3045, 4815),
    LedPosition::new(638, 499, -4138, -3045, 4815),
    LedPosition::new(639, 677, -3045, -4138, 4815),
    LedPosition::new(640, 389, 3045, 4138, 4815),
    LedPosition::new(641, 355, -3045, 4138, 4815),
    LedPosition::new(642, 821, 4138, -3045, 4815),
    LedPosition::new(643, 787, 4138, 3045, 4815),
    LedPosition::new(644, 643, 3045, -4138, 4815),
    LedPosition::new(645, 561, 0, -4573, 4200),
    LedPosition::new(646, 417, -4573, 0, 4200),
    LedPosition::new(647, 705, 4573, 0, 4200),
    LedPosition::new(648, 273, 0, 4573, 4200),
    LedPosition::new(649, 565, 435, -4573, 4200),
    LedPosition::new(650, 418, -4573, 435, 4200),
    LedPosition::new(651, 421, -4573, -435, 4200),
    LedPosition::new(652, 277, -435, 4573, 4200),
    LedPosition::new(653, 562, -435, -4573, 4200),
    LedPosition::new(654, 274, 435, 4573, 4200),
    LedPosition::new(655, 706, 4573, -435, 4200),
    LedPosition::new(656, 709, 4573, 435, 4200),
    LedPosition::new(657, 548, 2392, -4356, 4508),
    LedPosition::new(658, 692, 4356, 2392, 4508),
    LedPosition::new(659, 727, 4356, -2393, 4508),
    LedPosition::new(660, 439, -4356, 2393, 4508),
    LedPosition::new(661, 295, 2393, 4356, 4508),
    LedPosition::new(662, 404, -4356, -2392, 4508),
    LedPosition::new(663, 260, -2393, 4356, 4508),
    LedPosition::new(664, 583, -2393, -4356, 4508),
    LedPosition::new(665, 707, 4573, -870, 4200),
    LedPosition::new(666, 419, -4573, 870, 4200),
    LedPosition::new(667, 259, -870, 4573, 4200),
    LedPosition::new(668, 275, 870, 4573, 4200),
    LedPosition::new(669, 403, -4573, -870, 4200),
    LedPosition::new(670, 563, -870, -4573, 4200),
    LedPosition::new(671, 547, 870, -4573, 4200),
    LedPosition::new(672, 691, 4573, 870, 4200),
    LedPosition::new(673, 360, -3480, 4138, 4815),
    LedPosition::new(674, 792, 4138, 3480, 4815),
    LedPosition::new(675, 826, 4138, -3480, 4815),
    LedPosition::new(676, 394, 3480, 4138, 4815),
    LedPosition::new(677, 538, -4138, 3480, 4815),
    LedPosition::new(678, 504, -4138, -3480, 4815),
    LedPosition::new(679, 682, -3480, -4138, 4815),
    LedPosition::new(680, 648, 3480, -4138, 4815),
    LedPosition::new(681, 690, 4573, 1305, 4200),
    LedPosition::new(682, 258, -1305, 4573, 4200),
    LedPosition::new(683, 293, 1305, 4573, 4200),
    LedPosition::new(684, 546, 1305, -4573, 4200),
    LedPosition::new(685, 437, -4573, 1305, 4200),
    LedPosition::new(686, 402, -4573, -1305, 4200),
    LedPosition::new(687, 581, -1305, -4573, 4200),
    LedPosition::new(688, 725, 4573, -1305, 4200),
    LedPosition::new(689, 376, -2828, 4356, 4508),
    LedPosition::new(690, 375, 2828, 4356, 4508),
    LedPosition::new(691, 520, -4356, -2828, 4508),
    LedPosition::new(692, 519, -4356, 2828, 4508),
    LedPosition::new(693, 807, 4356, -2828, 4508),
    LedPosition::new(694, 663, -2828, -4356, 4508),
    LedPosition::new(695, 664, 2828, -4356, 4508),
    LedPosition::new(696, 808, 4356, 2828, 4508),
    LedPosition::new(697, 401, -4573, -1740, 4200),
    LedPosition::new(698, 721, 4573, -1740, 4200),
    LedPosition::new(699, 433, -4573, 1740, 4200),
    LedPosition::new(700, 577, -1740, -4573, 4200),
    LedPosition::new(701, 545, 1740, -4573, 4200),
    LedPosition::new(702, 689, 4573, 1740, 4200),
    LedPosition::new(703, 289, 1740, 4573, 4200),
    LedPosition::new(704, 257, -1740, 4573, 4200),
    LedPosition::new(705, 531, -4138, 3915, 4815),
    LedPosition::new(706, 353, -3915, 4138, 4815),
    LedPosition::new(707, 387, 3915, 4138, 4815),
    LedPosition::new(708, 819, 4138, -3915, 4815),
    LedPosition::new(709, 641, 3915, -4138, 4815),
    LedPosition::new(710, 675, -3915, -4138, 4815),
    LedPosition::new(711, 785, 4138, 3915, 4815),
    LedPosition::new(712, 497, -4138, -3915, 4815),
    LedPosition::new(713, 722, 4573, -2175, 4200),
    LedPosition::new(714, 290, 2175, 4573, 4200),
    LedPosition::new(715, 261, -2175, 4573, 4200),
    LedPosition::new(716, 405, -4573, -2175, 4200),
    LedPosition::new(717, 434, -4573, 2175, 4200),
    LedPosition::new(718, 693, 4573, 2175, 4200),
    LedPosition::new(719, 578, -2175, -4573, 4200),
    LedPosition::new(720, 549, 2175, -4573, 4200),
    LedPosition::new(721, 359, -3263, 4356, 4508),
    LedPosition::new(722, 528, -4356, 3263, 4508),
    LedPosition::new(723, 384, 3263, 4356, 4508),
    LedPosition::new(724, 503, -4356, -3263, 4508),
    LedPosition::new(725, 791, 4356, 3262, 4508),
    LedPosition::new(726, 816, 4356, -3263, 4508),
    LedPosition::new(727, 647, 3262, -4356, 4508),
    LedPosition::new(728, 672, -3263, -4356, 4508),
    LedPosition::new(729, 666, -218, -4791, 3892),
    LedPosition::new(730, 378, 218, 4791, 3892),
    LedPosition::new(731, 670, 217, -4791, 3892),
    LedPosition::new(732, 810, 4791, -218, 3892),
    LedPosition::new(733, 382, -218, 4791, 3892),
    LedPosition::new(734, 526, -4791, -217, 3892),
    LedPosition::new(735, 814, 4791, 217, 3892),
    LedPosition::new(736, 522, -4791, 218, 3892),
    LedPosition::new(737, 525, -4791, -652, 3892),
    LedPosition::new(738, 383, 652, 4791, 3892),
    LedPosition::new(739, 669, 652, -4791, 3892),
    LedPosition::new(740, 381, -652, 4791, 3892),
    LedPosition::new(741, 813, 4791, 652, 3892),
    LedPosition::new(742, 527, -4791, 653, 3892),
    LedPosition::new(743, 671, -653, -4791, 3892),
    LedPosition::new(744, 815, 4791, -653, 3892),
    LedPosition::new(745, 800, 4573, 2610, 4200),
    LedPosition::new(746, 656, 2610, -4573, 4200),
    LedPosition::new(747, 291, 2610, 4573, 4200),
    LedPosition::new(748, 723, 4573, -2610, 4200),
    LedPosition::new(749, 579, -2610, -4573, 4200),
    LedPosition::new(750, 368, -2610, 4573, 4200),
    LedPosition::new(751, 512, -4573, -2610, 4200),
    LedPosition::new(752, 435, -4573, 2610, 4200),
    LedPosition::new(753, 668, 1087, -4791, 3892),
    LedPosition::new(754, 380, -1088, 4791, 3892),
    LedPosition::new(755, 812, 4791, 1087, 3892),
    LedPosition::new(756, 524, -4791, -1087, 3892),
    LedPosition::new(757, 379, 1088, 4791, 3892),
    LedPosition::new(758, 523, -4791, 1088, 3892),
    LedPosition::new(759, 667, -1088, -4791, 3892),
    LedPosition::new(760, 811, 4791, -1088, 3892),
    LedPosition::new(761, 789, 4356, 3698, 4508),
    LedPosition::new(762, 645, 3698, -4356, 4508),
    LedPosition::new(763, 535, -4356, 3698, 4508),
    LedPosition::new(764, 501, -4356, -3698, 4508),
    LedPosition::new(765, 679, -3698, -4356, 4508),
    LedPosition::new(766, 391, 3698, 4356, 4508),
    LedPosition::new(767, 357, -3698, 4356, 4508),
    LedPosition::new(768, 823, 4356, -3698, 4508),
    LedPosition::new(769, 804, 4791, 1522, 3892),
    LedPosition::new(770, 803, 4791, -1523, 3892),
    LedPosition::new(771, 372, -1523, 4791, 3892),
    LedPosition::new(772, 515, -4791, 1523, 3892),
    LedPosition::new(773, 659, -1523, -4791, 3892),
    LedPosition::new(774, 371, 1523, 4791, 3892),
    LedPosition::new(775, 516, -4791, -1522, 3892),
    LedPosition::new(776, 660, 1522, -4791, 3892),
    LedPosition::new(777, 802, 4573, -3045, 4200),
    LedPosition::new(778, 661, 3045, -4573, 4200),
    LedPosition::new(779, 370, 3045, 4573, 4200),
    LedPosition::new(780, 658, -3045, -4573, 4200),
    LedPosition::new(781, 517, -4573, -3045, 4200),
    LedPosition::new(782, 805, 4573, 3045, 4200),
    LedPosition::new(783, 373, -3045, 4573, 4200),
    LedPosition::new(784, 514, -4573, 3045, 4200),
    LedPosition::new(785, 513, -4791, -1958, 3892),
    LedPosition::new(786, 657, 1957, -4791, 3892),
    LedPosition::new(787, 369, -1958, 4791, 3892),
    LedPosition::new(788, 374, 1958, 4791, 3892),
    LedPosition::new(789, 806, 4791, -1958, 3892),
    LedPosition::new(790, 518, -4791, 1958, 3892),
    LedPosition::new(791, 662, -1958, -4791, 3892),
    LedPosition::new(792, 801, 4791, 1957, 3892),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::CHANNELS_PER_CHIP;
    use std::collections::HashSet;

    #[test]
    fn test_table_length_matches_descriptor() {
        assert_eq!(SciWing::positions().len(), SciWing::LED_COUNT as usize);
    }

    #[test]
    fn test_indices_contiguous_from_zero() {
        for (expected, led) in SciWing::positions().iter().enumerate() {
            assert_eq!(led.index() as usize, expected);
        }
    }

    #[test]
    fn test_populated_channels_unique_and_in_range() {
        let channel_count = SciWing::CHIP_COUNT * CHANNELS_PER_CHIP;
        let mut seen = HashSet::new();

        for led in SciWing::positions() {
            let Some(channel) = led.channel() else {
                continue;
            };
            assert!(channel < channel_count, "channel {channel} out of range");
            assert!(seen.insert(channel), "channel {channel} assigned twice");
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        for led in 0..SciWing::LED_COUNT as usize {
            let first = SciWing::positions()[led].channel();
            let second = SciWing::positions()[led].channel();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_center_led_is_at_origin() {
        let center = &SciWing::positions()[SciWing::CENTER_LED as usize];
        assert_eq!((center.x(), center.y()), (0, 0));
        assert_eq!(center.channel(), Some(90));
    }
}
