//! HTML5 named character references, sorted by name (byte order).
//!
//! Generated from the WHATWG `entities.json` list. Names exclude the
//! leading `&` and trailing `;`.

use super::Entity;

pub(super) const ENTITIES: &[Entity] = &[
    Entity::new("AElig", "\u{C6}"),
    Entity::new("AMP", "&"),
    Entity::new("Aacute", "\u{C1}"),
    Entity::new("Abreve", "\u{102}"),
    Entity::new("Acirc", "\u{C2}"),
    Entity::new("Acy", "\u{410}"),
    Entity::new("Afr", "\u{1D504}"),
    Entity::new("Agrave", "\u{C0}"),
    Entity::new("Alpha", "\u{391}"),
    Entity::new("Amacr", "\u{100}"),
    Entity::new("And", "\u{2A53}"),
    Entity::new("Aogon", "\u{104}"),
    Entity::new("Aopf", "\u{1D538}"),
    Entity::new("ApplyFunction", "\u{2061}"),
    Entity::new("Aring", "\u{C5}"),
    Entity::new("Ascr", "\u{1D49C}"),
    Entity::new("Assign", "\u{2254}"),
    Entity::new("Atilde", "\u{C3}"),
    Entity::new("Auml", "\u{C4}"),
    Entity::new("Backslash", "\u{2216}"),
    Entity::new("Barv", "\u{2AE7}"),
    Entity::new("Barwed", "\u{2306}"),
    Entity::new("Bcy", "\u{411}"),
    Entity::new("Because", "\u{2235}"),
    Entity::new("Bernoullis", "\u{212C}"),
    Entity::new("Beta", "\u{392}"),
    Entity::new("Bfr", "\u{1D505}"),
    Entity::new("Bopf", "\u{1D539}"),
    Entity::new("Breve", "\u{2D8}"),
    Entity::new("Bscr", "\u{212C}"),
    Entity::new("Bumpeq", "\u{224E}"),
    Entity::new("CHcy", "\u{427}"),
    Entity::new("COPY", "\u{A9}"),
    Entity::new("Cacute", "\u{106}"),
    Entity::new("Cap", "\u{22D2}"),
    Entity::new("CapitalDifferentialD", "\u{2145}"),
    Entity::new("Cayleys", "\u{212D}"),
    Entity::new("Ccaron", "\u{10C}"),
    Entity::new("Ccedil", "\u{C7}"),
    Entity::new("Ccirc", "\u{108}"),
    Entity::new("Cconint", "\u{2230}"),
    Entity::new("Cdot", "\u{10A}"),
    Entity::new("Cedilla", "\u{B8}"),
    Entity::new("CenterDot", "\u{B7}"),
    Entity::new("Cfr", "\u{212D}"),
    Entity::new("Chi", "\u{3A7}"),
    Entity::new("CircleDot", "\u{2299}"),
    Entity::new("CircleMinus", "\u{2296}"),
    Entity::new("CirclePlus", "\u{2295}"),
    Entity::new("CircleTimes", "\u{2297}"),
    Entity::new("ClockwiseContourIntegral", "\u{2232}"),
    Entity::new("CloseCurlyDoubleQuote", "\u{201D}"),
    Entity::new("CloseCurlyQuote", "\u{2019}"),
    Entity::new("Colon", "\u{2237}"),
    Entity::new("Colone", "\u{2A74}"),
    Entity::new("Congruent", "\u{2261}"),
    Entity::new("Conint", "\u{222F}"),
    Entity::new("ContourIntegral", "\u{222E}"),
    Entity::new("Copf", "\u{2102}"),
    Entity::new("Coproduct", "\u{2210}"),
    Entity::new("CounterClockwiseContourIntegral", "\u{2233}"),
    Entity::new("Cross", "\u{2A2F}"),
    Entity::new("Cscr", "\u{1D49E}"),
    Entity::new("Cup", "\u{22D3}"),
    Entity::new("CupCap", "\u{224D}"),
    Entity::new("DD", "\u{2145}"),
    Entity::new("DDotrahd", "\u{2911}"),
    Entity::new("DJcy", "\u{402}"),
    Entity::new("DScy", "\u{405}"),
    Entity::new("DZcy", "\u{40F}"),
    Entity::new("Dagger", "\u{2021}"),
    Entity::new("Darr", "\u{21A1}"),
    Entity::new("Dashv", "\u{2AE4}"),
    Entity::new("Dcaron", "\u{10E}"),
    Entity::new("Dcy", "\u{414}"),
    Entity::new("Del", "\u{2207}"),
    Entity::new("Delta", "\u{394}"),
    Entity::new("Dfr", "\u{1D507}"),
    Entity::new("DiacriticalAcute", "\u{B4}"),
    Entity::new("DiacriticalDot", "\u{2D9}"),
    Entity::new("DiacriticalDoubleAcute", "\u{2DD}"),
    Entity::new("DiacriticalGrave", "`"),
    Entity::new("DiacriticalTilde", "\u{2DC}"),
    Entity::new("Diamond", "\u{22C4}"),
    Entity::new("DifferentialD", "\u{2146}"),
    Entity::new("Dopf", "\u{1D53B}"),
    Entity::new("Dot", "\u{A8}"),
    Entity::new("DotDot", "\u{20DC}"),
    Entity::new("DotEqual", "\u{2250}"),
    Entity::new("DoubleContourIntegral", "\u{222F}"),
    Entity::new("DoubleDot", "\u{A8}"),
    Entity::new("DoubleDownArrow", "\u{21D3}"),
    Entity::new("DoubleLeftArrow", "\u{21D0}"),
    Entity::new("DoubleLeftRightArrow", "\u{21D4}"),
    Entity::new("DoubleLeftTee", "\u{2AE4}"),
    Entity::new("DoubleLongLeftArrow", "\u{27F8}"),
    Entity::new("DoubleLongLeftRightArrow", "\u{27FA}"),
    Entity::new("DoubleLongRightArrow", "\u{27F9}"),
    Entity::new("DoubleRightArrow", "\u{21D2}"),
    Entity::new("DoubleRightTee", "\u{22A8}"),
    Entity::new("DoubleUpArrow", "\u{21D1}"),
    Entity::new("DoubleUpDownArrow", "\u{21D5}"),
    Entity::new("DoubleVerticalBar", "\u{2225}"),
    Entity::new("DownArrow", "\u{2193}"),
    Entity::new("DownArrowBar", "\u{2913}"),
    Entity::new("DownArrowUpArrow", "\u{21F5}"),
    Entity::new("DownBreve", "\u{311}"),
    Entity::new("DownLeftRightVector", "\u{2950}"),
    Entity::new("DownLeftTeeVector", "\u{295E}"),
    Entity::new("DownLeftVector", "\u{21BD}"),
    Entity::new("DownLeftVectorBar", "\u{2956}"),
    Entity::new("DownRightTeeVector", "\u{295F}"),
    Entity::new("DownRightVector", "\u{21C1}"),
    Entity::new("DownRightVectorBar", "\u{2957}"),
    Entity::new("DownTee", "\u{22A4}"),
    Entity::new("DownTeeArrow", "\u{21A7}"),
    Entity::new("Downarrow", "\u{21D3}"),
    Entity::new("Dscr", "\u{1D49F}"),
    Entity::new("Dstrok", "\u{110}"),
    Entity::new("ENG", "\u{14A}"),
    Entity::new("ETH", "\u{D0}"),
    Entity::new("Eacute", "\u{C9}"),
    Entity::new("Ecaron", "\u{11A}"),
    Entity::new("Ecirc", "\u{CA}"),
    Entity::new("Ecy", "\u{42D}"),
    Entity::new("Edot", "\u{116}"),
    Entity::new("Efr", "\u{1D508}"),
    Entity::new("Egrave", "\u{C8}"),
    Entity::new("Element", "\u{2208}"),
    Entity::new("Emacr", "\u{112}"),
    Entity::new("EmptySmallSquare", "\u{25FB}"),
    Entity::new("EmptyVerySmallSquare", "\u{25AB}"),
    Entity::new("Eogon", "\u{118}"),
    Entity::new("Eopf", "\u{1D53C}"),
    Entity::new("Epsilon", "\u{395}"),
    Entity::new("Equal", "\u{2A75}"),
    Entity::new("EqualTilde", "\u{2242}"),
    Entity::new("Equilibrium", "\u{21CC}"),
    Entity::new("Escr", "\u{2130}"),
    Entity::new("Esim", "\u{2A73}"),
    Entity::new("Eta", "\u{397}"),
    Entity::new("Euml", "\u{CB}"),
    Entity::new("Exists", "\u{2203}"),
    Entity::new("ExponentialE", "\u{2147}"),
    Entity::new("Fcy", "\u{424}"),
    Entity::new("Ffr", "\u{1D509}"),
    Entity::new("FilledSmallSquare", "\u{25FC}"),
    Entity::new("FilledVerySmallSquare", "\u{25AA}"),
    Entity::new("Fopf", "\u{1D53D}"),
    Entity::new("ForAll", "\u{2200}"),
    Entity::new("Fouriertrf", "\u{2131}"),
    Entity::new("Fscr", "\u{2131}"),
    Entity::new("GJcy", "\u{403}"),
    Entity::new("GT", ">"),
    Entity::new("Gamma", "\u{393}"),
    Entity::new("Gammad", "\u{3DC}"),
    Entity::new("Gbreve", "\u{11E}"),
    Entity::new("Gcedil", "\u{122}"),
    Entity::new("Gcirc", "\u{11C}"),
    Entity::new("Gcy", "\u{413}"),
    Entity::new("Gdot", "\u{120}"),
    Entity::new("Gfr", "\u{1D50A}"),
    Entity::new("Gg", "\u{22D9}"),
    Entity::new("Gopf", "\u{1D53E}"),
    Entity::new("GreaterEqual", "\u{2265}"),
    Entity::new("GreaterEqualLess", "\u{22DB}"),
    Entity::new("GreaterFullEqual", "\u{2267}"),
    Entity::new("GreaterGreater", "\u{2AA2}"),
    Entity::new("GreaterLess", "\u{2277}"),
    Entity::new("GreaterSlantEqual", "\u{2A7E}"),
    Entity::new("GreaterTilde", "\u{2273}"),
    Entity::new("Gscr", "\u{1D4A2}"),
    Entity::new("Gt", "\u{226B}"),
    Entity::new("HARDcy", "\u{42A}"),
    Entity::new("Hacek", "\u{2C7}"),
    Entity::new("Hat", "^"),
    Entity::new("Hcirc", "\u{124}"),
    Entity::new("Hfr", "\u{210C}"),
    Entity::new("HilbertSpace", "\u{210B}"),
    Entity::new("Hopf", "\u{210D}"),
    Entity::new("HorizontalLine", "\u{2500}"),
    Entity::new("Hscr", "\u{210B}"),
    Entity::new("Hstrok", "\u{126}"),
    Entity::new("HumpDownHump", "\u{224E}"),
    Entity::new("HumpEqual", "\u{224F}"),
    Entity::new("IEcy", "\u{415}"),
    Entity::new("IJlig", "\u{132}"),
    Entity::new("IOcy", "\u{401}"),
    Entity::new("Iacute", "\u{CD}"),
    Entity::new("Icirc", "\u{CE}"),
    Entity::new("Icy", "\u{418}"),
    Entity::new("Idot", "\u{130}"),
    Entity::new("Ifr", "\u{2111}"),
    Entity::new("Igrave", "\u{CC}"),
    Entity::new("Im", "\u{2111}"),
    Entity::new("Imacr", "\u{12A}"),
    Entity::new("ImaginaryI", "\u{2148}"),
    Entity::new("Implies", "\u{21D2}"),
    Entity::new("Int", "\u{222C}"),
    Entity::new("Integral", "\u{222B}"),
    Entity::new("Intersection", "\u{22C2}"),
    Entity::new("InvisibleComma", "\u{2063}"),
    Entity::new("InvisibleTimes", "\u{2062}"),
    Entity::new("Iogon", "\u{12E}"),
    Entity::new("Iopf", "\u{1D540}"),
    Entity::new("Iota", "\u{399}"),
    Entity::new("Iscr", "\u{2110}"),
    Entity::new("Itilde", "\u{128}"),
    Entity::new("Iukcy", "\u{406}"),
    Entity::new("Iuml", "\u{CF}"),
    Entity::new("Jcirc", "\u{134}"),
    Entity::new("Jcy", "\u{419}"),
    Entity::new("Jfr", "\u{1D50D}"),
    Entity::new("Jopf", "\u{1D541}"),
    Entity::new("Jscr", "\u{1D4A5}"),
    Entity::new("Jsercy", "\u{408}"),
    Entity::new("Jukcy", "\u{404}"),
    Entity::new("KHcy", "\u{425}"),
    Entity::new("KJcy", "\u{40C}"),
    Entity::new("Kappa", "\u{39A}"),
    Entity::new("Kcedil", "\u{136}"),
    Entity::new("Kcy", "\u{41A}"),
    Entity::new("Kfr", "\u{1D50E}"),
    Entity::new("Kopf", "\u{1D542}"),
    Entity::new("Kscr", "\u{1D4A6}"),
    Entity::new("LJcy", "\u{409}"),
    Entity::new("LT", "<"),
    Entity::new("Lacute", "\u{139}"),
    Entity::new("Lambda", "\u{39B}"),
    Entity::new("Lang", "\u{27EA}"),
    Entity::new("Laplacetrf", "\u{2112}"),
    Entity::new("Larr", "\u{219E}"),
    Entity::new("Lcaron", "\u{13D}"),
    Entity::new("Lcedil", "\u{13B}"),
    Entity::new("Lcy", "\u{41B}"),
    Entity::new("LeftAngleBracket", "\u{27E8}"),
    Entity::new("LeftArrow", "\u{2190}"),
    Entity::new("LeftArrowBar", "\u{21E4}"),
    Entity::new("LeftArrowRightArrow", "\u{21C6}"),
    Entity::new("LeftCeiling", "\u{2308}"),
    Entity::new("LeftDoubleBracket", "\u{27E6}"),
    Entity::new("LeftDownTeeVector", "\u{2961}"),
    Entity::new("LeftDownVector", "\u{21C3}"),
    Entity::new("LeftDownVectorBar", "\u{2959}"),
    Entity::new("LeftFloor", "\u{230A}"),
    Entity::new("LeftRightArrow", "\u{2194}"),
    Entity::new("LeftRightVector", "\u{294E}"),
    Entity::new("LeftTee", "\u{22A3}"),
    Entity::new("LeftTeeArrow", "\u{21A4}"),
    Entity::new("LeftTeeVector", "\u{295A}"),
    Entity::new("LeftTriangle", "\u{22B2}"),
    Entity::new("LeftTriangleBar", "\u{29CF}"),
    Entity::new("LeftTriangleEqual", "\u{22B4}"),
    Entity::new("LeftUpDownVector", "\u{2951}"),
    Entity::new("LeftUpTeeVector", "\u{2960}"),
    Entity::new("LeftUpVector", "\u{21BF}"),
    Entity::new("LeftUpVectorBar", "\u{2958}"),
    Entity::new("LeftVector", "\u{21BC}"),
    Entity::new("LeftVectorBar", "\u{2952}"),
    Entity::new("Leftarrow", "\u{21D0}"),
    Entity::new("Leftrightarrow", "\u{21D4}"),
    Entity::new("LessEqualGreater", "\u{22DA}"),
    Entity::new("LessFullEqual", "\u{2266}"),
    Entity::new("LessGreater", "\u{2276}"),
    Entity::new("LessLess", "\u{2AA1}"),
    Entity::new("LessSlantEqual", "\u{2A7D}"),
    Entity::new("LessTilde", "\u{2272}"),
    Entity::new("Lfr", "\u{1D50F}"),
    Entity::new("Ll", "\u{22D8}"),
    Entity::new("Lleftarrow", "\u{21DA}"),
    Entity::new("Lmidot", "\u{13F}"),
    Entity::new("LongLeftArrow", "\u{27F5}"),
    Entity::new("LongLeftRightArrow", "\u{27F7}"),
    Entity::new("LongRightArrow", "\u{27F6}"),
    Entity::new("Longleftarrow", "\u{27F8}"),
    Entity::new("Longleftrightarrow", "\u{27FA}"),
    Entity::new("Longrightarrow", "\u{27F9}"),
    Entity::new("Lopf", "\u{1D543}"),
    Entity::new("LowerLeftArrow", "\u{2199}"),
    Entity::new("LowerRightArrow", "\u{2198}"),
    Entity::new("Lscr", "\u{2112}"),
    Entity::new("Lsh", "\u{21B0}"),
    Entity::new("Lstrok", "\u{141}"),
    Entity::new("Lt", "\u{226A}"),
    Entity::new("Map", "\u{2905}"),
    Entity::new("Mcy", "\u{41C}"),
    Entity::new("MediumSpace", "\u{205F}"),
    Entity::new("Mellintrf", "\u{2133}"),
    Entity::new("Mfr", "\u{1D510}"),
    Entity::new("MinusPlus", "\u{2213}"),
    Entity::new("Mopf", "\u{1D544}"),
    Entity::new("Mscr", "\u{2133}"),
    Entity::new("Mu", "\u{39C}"),
    Entity::new("NJcy", "\u{40A}"),
    Entity::new("Nacute", "\u{143}"),
    Entity::new("Ncaron", "\u{147}"),
    Entity::new("Ncedil", "\u{145}"),
    Entity::new("Ncy", "\u{41D}"),
    Entity::new("NegativeMediumSpace", "\u{200B}"),
    Entity::new("NegativeThickSpace", "\u{200B}"),
    Entity::new("NegativeThinSpace", "\u{200B}"),
    Entity::new("NegativeVeryThinSpace", "\u{200B}"),
    Entity::new("NestedGreaterGreater", "\u{226B}"),
    Entity::new("NestedLessLess", "\u{226A}"),
    Entity::new("NewLine", "\u{A}"),
    Entity::new("Nfr", "\u{1D511}"),
    Entity::new("NoBreak", "\u{2060}"),
    Entity::new("NonBreakingSpace", "\u{A0}"),
    Entity::new("Nopf", "\u{2115}"),
    Entity::new("Not", "\u{2AEC}"),
    Entity::new("NotCongruent", "\u{2262}"),
    Entity::new("NotCupCap", "\u{226D}"),
    Entity::new("NotDoubleVerticalBar", "\u{2226}"),
    Entity::new("NotElement", "\u{2209}"),
    Entity::new("NotEqual", "\u{2260}"),
    Entity::new("NotEqualTilde", "\u{2242}\u{338}"),
    Entity::new("NotExists", "\u{2204}"),
    Entity::new("NotGreater", "\u{226F}"),
    Entity::new("NotGreaterEqual", "\u{2271}"),
    Entity::new("NotGreaterFullEqual", "\u{2267}\u{338}"),
    Entity::new("NotGreaterGreater", "\u{226B}\u{338}"),
    Entity::new("NotGreaterLess", "\u{2279}"),
    Entity::new("NotGreaterSlantEqual", "\u{2A7E}\u{338}"),
    Entity::new("NotGreaterTilde", "\u{2275}"),
    Entity::new("NotHumpDownHump", "\u{224E}\u{338}"),
    Entity::new("NotHumpEqual", "\u{224F}\u{338}"),
    Entity::new("NotLeftTriangle", "\u{22EA}"),
    Entity::new("NotLeftTriangleBar", "\u{29CF}\u{338}"),
    Entity::new("NotLeftTriangleEqual", "\u{22EC}"),
    Entity::new("NotLess", "\u{226E}"),
    Entity::new("NotLessEqual", "\u{2270}"),
    Entity::new("NotLessGreater", "\u{2278}"),
    Entity::new("NotLessLess", "\u{226A}\u{338}"),
    Entity::new("NotLessSlantEqual", "\u{2A7D}\u{338}"),
    Entity::new("NotLessTilde", "\u{2274}"),
    Entity::new("NotNestedGreaterGreater", "\u{2AA2}\u{338}"),
    Entity::new("NotNestedLessLess", "\u{2AA1}\u{338}"),
    Entity::new("NotPrecedes", "\u{2280}"),
    Entity::new("NotPrecedesEqual", "\u{2AAF}\u{338}"),
    Entity::new("NotPrecedesSlantEqual", "\u{22E0}"),
    Entity::new("NotReverseElement", "\u{220C}"),
    Entity::new("NotRightTriangle", "\u{22EB}"),
    Entity::new("NotRightTriangleBar", "\u{29D0}\u{338}"),
    Entity::new("NotRightTriangleEqual", "\u{22ED}"),
    Entity::new("NotSquareSubset", "\u{228F}\u{338}"),
    Entity::new("NotSquareSubsetEqual", "\u{22E2}"),
    Entity::new("NotSquareSuperset", "\u{2290}\u{338}"),
    Entity::new("NotSquareSupersetEqual", "\u{22E3}"),
    Entity::new("NotSubset", "\u{2282}\u{20D2}"),
    Entity::new("NotSubsetEqual", "\u{2288}"),
    Entity::new("NotSucceeds", "\u{2281}"),
    Entity::new("NotSucceedsEqual", "\u{2AB0}\u{338}"),
    Entity::new("NotSucceedsSlantEqual", "\u{22E1}"),
    Entity::new("NotSucceedsTilde", "\u{227F}\u{338}"),
    Entity::new("NotSuperset", "\u{2283}\u{20D2}"),
    Entity::new("NotSupersetEqual", "\u{2289}"),
    Entity::new("NotTilde", "\u{2241}"),
    Entity::new("NotTildeEqual", "\u{2244}"),
    Entity::new("NotTildeFullEqual", "\u{2247}"),
    Entity::new("NotTildeTilde", "\u{2249}"),
    Entity::new("NotVerticalBar", "\u{2224}"),
    Entity::new("Nscr", "\u{1D4A9}"),
    Entity::new("Ntilde", "\u{D1}"),
    Entity::new("Nu", "\u{39D}"),
    Entity::new("OElig", "\u{152}"),
    Entity::new("Oacute", "\u{D3}"),
    Entity::new("Ocirc", "\u{D4}"),
    Entity::new("Ocy", "\u{41E}"),
    Entity::new("Odblac", "\u{150}"),
    Entity::new("Ofr", "\u{1D512}"),
    Entity::new("Ograve", "\u{D2}"),
    Entity::new("Omacr", "\u{14C}"),
    Entity::new("Omega", "\u{3A9}"),
    Entity::new("Omicron", "\u{39F}"),
    Entity::new("Oopf", "\u{1D546}"),
    Entity::new("OpenCurlyDoubleQuote", "\u{201C}"),
    Entity::new("OpenCurlyQuote", "\u{2018}"),
    Entity::new("Or", "\u{2A54}"),
    Entity::new("Oscr", "\u{1D4AA}"),
    Entity::new("Oslash", "\u{D8}"),
    Entity::new("Otilde", "\u{D5}"),
    Entity::new("Otimes", "\u{2A37}"),
    Entity::new("Ouml", "\u{D6}"),
    Entity::new("OverBar", "\u{203E}"),
    Entity::new("OverBrace", "\u{23DE}"),
    Entity::new("OverBracket", "\u{23B4}"),
    Entity::new("OverParenthesis", "\u{23DC}"),
    Entity::new("PartialD", "\u{2202}"),
    Entity::new("Pcy", "\u{41F}"),
    Entity::new("Pfr", "\u{1D513}"),
    Entity::new("Phi", "\u{3A6}"),
    Entity::new("Pi", "\u{3A0}"),
    Entity::new("PlusMinus", "\u{B1}"),
    Entity::new("Poincareplane", "\u{210C}"),
    Entity::new("Popf", "\u{2119}"),
    Entity::new("Pr", "\u{2ABB}"),
    Entity::new("Precedes", "\u{227A}"),
    Entity::new("PrecedesEqual", "\u{2AAF}"),
    Entity::new("PrecedesSlantEqual", "\u{227C}"),
    Entity::new("PrecedesTilde", "\u{227E}"),
    Entity::new("Prime", "\u{2033}"),
    Entity::new("Product", "\u{220F}"),
    Entity::new("Proportion", "\u{2237}"),
    Entity::new("Proportional", "\u{221D}"),
    Entity::new("Pscr", "\u{1D4AB}"),
    Entity::new("Psi", "\u{3A8}"),
    Entity::new("QUOT", "\""),
    Entity::new("Qfr", "\u{1D514}"),
    Entity::new("Qopf", "\u{211A}"),
    Entity::new("Qscr", "\u{1D4AC}"),
    Entity::new("RBarr", "\u{2910}"),
    Entity::new("REG", "\u{AE}"),
    Entity::new("Racute", "\u{154}"),
    Entity::new("Rang", "\u{27EB}"),
    Entity::new("Rarr", "\u{21A0}"),
    Entity::new("Rarrtl", "\u{2916}"),
    Entity::new("Rcaron", "\u{158}"),
    Entity::new("Rcedil", "\u{156}"),
    Entity::new("Rcy", "\u{420}"),
    Entity::new("Re", "\u{211C}"),
    Entity::new("ReverseElement", "\u{220B}"),
    Entity::new("ReverseEquilibrium", "\u{21CB}"),
    Entity::new("ReverseUpEquilibrium", "\u{296F}"),
    Entity::new("Rfr", "\u{211C}"),
    Entity::new("Rho", "\u{3A1}"),
    Entity::new("RightAngleBracket", "\u{27E9}"),
    Entity::new("RightArrow", "\u{2192}"),
    Entity::new("RightArrowBar", "\u{21E5}"),
    Entity::new("RightArrowLeftArrow", "\u{21C4}"),
    Entity::new("RightCeiling", "\u{2309}"),
    Entity::new("RightDoubleBracket", "\u{27E7}"),
    Entity::new("RightDownTeeVector", "\u{295D}"),
    Entity::new("RightDownVector", "\u{21C2}"),
    Entity::new("RightDownVectorBar", "\u{2955}"),
    Entity::new("RightFloor", "\u{230B}"),
    Entity::new("RightTee", "\u{22A2}"),
    Entity::new("RightTeeArrow", "\u{21A6}"),
    Entity::new("RightTeeVector", "\u{295B}"),
    Entity::new("RightTriangle", "\u{22B3}"),
    Entity::new("RightTriangleBar", "\u{29D0}"),
    Entity::new("RightTriangleEqual", "\u{22B5}"),
    Entity::new("RightUpDownVector", "\u{294F}"),
    Entity::new("RightUpTeeVector", "\u{295C}"),
    Entity::new("RightUpVector", "\u{21BE}"),
    Entity::new("RightUpVectorBar", "\u{2954}"),
    Entity::new("RightVector", "\u{21C0}"),
    Entity::new("RightVectorBar", "\u{2953}"),
    Entity::new("Rightarrow", "\u{21D2}"),
    Entity::new("Ropf", "\u{211D}"),
    Entity::new("RoundImplies", "\u{2970}"),
    Entity::new("Rrightarrow", "\u{21DB}"),
    Entity::new("Rscr", "\u{211B}"),
    Entity::new("Rsh", "\u{21B1}"),
    Entity::new("RuleDelayed", "\u{29F4}"),
    Entity::new("SHCHcy", "\u{429}"),
    Entity::new("SHcy", "\u{428}"),
    Entity::new("SOFTcy", "\u{42C}"),
    Entity::new("Sacute", "\u{15A}"),
    Entity::new("Sc", "\u{2ABC}"),
    Entity::new("Scaron", "\u{160}"),
    Entity::new("Scedil", "\u{15E}"),
    Entity::new("Scirc", "\u{15C}"),
    Entity::new("Scy", "\u{421}"),
    Entity::new("Sfr", "\u{1D516}"),
    Entity::new("ShortDownArrow", "\u{2193}"),
    Entity::new("ShortLeftArrow", "\u{2190}"),
    Entity::new("ShortRightArrow", "\u{2192}"),
    Entity::new("ShortUpArrow", "\u{2191}"),
    Entity::new("Sigma", "\u{3A3}"),
    Entity::new("SmallCircle", "\u{2218}"),
    Entity::new("Sopf", "\u{1D54A}"),
    Entity::new("Sqrt", "\u{221A}"),
    Entity::new("Square", "\u{25A1}"),
    Entity::new("SquareIntersection", "\u{2293}"),
    Entity::new("SquareSubset", "\u{228F}"),
    Entity::new("SquareSubsetEqual", "\u{2291}"),
    Entity::new("SquareSuperset", "\u{2290}"),
    Entity::new("SquareSupersetEqual", "\u{2292}"),
    Entity::new("SquareUnion", "\u{2294}"),
    Entity::new("Sscr", "\u{1D4AE}"),
    Entity::new("Star", "\u{22C6}"),
    Entity::new("Sub", "\u{22D0}"),
    Entity::new("Subset", "\u{22D0}"),
    Entity::new("SubsetEqual", "\u{2286}"),
    Entity::new("Succeeds", "\u{227B}"),
    Entity::new("SucceedsEqual", "\u{2AB0}"),
    Entity::new("SucceedsSlantEqual", "\u{227D}"),
    Entity::new("SucceedsTilde", "\u{227F}"),
    Entity::new("SuchThat", "\u{220B}"),
    Entity::new("Sum", "\u{2211}"),
    Entity::new("Sup", "\u{22D1}"),
    Entity::new("Superset", "\u{2283}"),
    Entity::new("SupersetEqual", "\u{2287}"),
    Entity::new("Supset", "\u{22D1}"),
    Entity::new("THORN", "\u{DE}"),
    Entity::new("TRADE", "\u{2122}"),
    Entity::new("TSHcy", "\u{40B}"),
    Entity::new("TScy", "\u{426}"),
    Entity::new("Tab", "\u{9}"),
    Entity::new("Tau", "\u{3A4}"),
    Entity::new("Tcaron", "\u{164}"),
    Entity::new("Tcedil", "\u{162}"),
    Entity::new("Tcy", "\u{422}"),
    Entity::new("Tfr", "\u{1D517}"),
    Entity::new("Therefore", "\u{2234}"),
    Entity::new("Theta", "\u{398}"),
    Entity::new("ThickSpace", "\u{205F}\u{200A}"),
    Entity::new("ThinSpace", "\u{2009}"),
    Entity::new("Tilde", "\u{223C}"),
    Entity::new("TildeEqual", "\u{2243}"),
    Entity::new("TildeFullEqual", "\u{2245}"),
    Entity::new("TildeTilde", "\u{2248}"),
    Entity::new("Topf", "\u{1D54B}"),
    Entity::new("TripleDot", "\u{20DB}"),
    Entity::new("Tscr", "\u{1D4AF}"),
    Entity::new("Tstrok", "\u{166}"),
    Entity::new("Uacute", "\u{DA}"),
    Entity::new("Uarr", "\u{219F}"),
    Entity::new("Uarrocir", "\u{2949}"),
    Entity::new("Ubrcy", "\u{40E}"),
    Entity::new("Ubreve", "\u{16C}"),
    Entity::new("Ucirc", "\u{DB}"),
    Entity::new("Ucy", "\u{423}"),
    Entity::new("Udblac", "\u{170}"),
    Entity::new("Ufr", "\u{1D518}"),
    Entity::new("Ugrave", "\u{D9}"),
    Entity::new("Umacr", "\u{16A}"),
    Entity::new("UnderBar", "_"),
    Entity::new("UnderBrace", "\u{23DF}"),
    Entity::new("UnderBracket", "\u{23B5}"),
    Entity::new("UnderParenthesis", "\u{23DD}"),
    Entity::new("Union", "\u{22C3}"),
    Entity::new("UnionPlus", "\u{228E}"),
    Entity::new("Uogon", "\u{172}"),
    Entity::new("Uopf", "\u{1D54C}"),
    Entity::new("UpArrow", "\u{2191}"),
    Entity::new("UpArrowBar", "\u{2912}"),
    Entity::new("UpArrowDownArrow", "\u{21C5}"),
    Entity::new("UpDownArrow", "\u{2195}"),
    Entity::new("UpEquilibrium", "\u{296E}"),
    Entity::new("UpTee", "\u{22A5}"),
    Entity::new("UpTeeArrow", "\u{21A5}"),
    Entity::new("Uparrow", "\u{21D1}"),
    Entity::new("Updownarrow", "\u{21D5}"),
    Entity::new("UpperLeftArrow", "\u{2196}"),
    Entity::new("UpperRightArrow", "\u{2197}"),
    Entity::new("Upsi", "\u{3D2}"),
    Entity::new("Upsilon", "\u{3A5}"),
    Entity::new("Uring", "\u{16E}"),
    Entity::new("Uscr", "\u{1D4B0}"),
    Entity::new("Utilde", "\u{168}"),
    Entity::new("Uuml", "\u{DC}"),
    Entity::new("VDash", "\u{22AB}"),
    Entity::new("Vbar", "\u{2AEB}"),
    Entity::new("Vcy", "\u{412}"),
    Entity::new("Vdash", "\u{22A9}"),
    Entity::new("Vdashl", "\u{2AE6}"),
    Entity::new("Vee", "\u{22C1}"),
    Entity::new("Verbar", "\u{2016}"),
    Entity::new("Vert", "\u{2016}"),
    Entity::new("VerticalBar", "\u{2223}"),
    Entity::new("VerticalLine", "|"),
    Entity::new("VerticalSeparator", "\u{2758}"),
    Entity::new("VerticalTilde", "\u{2240}"),
    Entity::new("VeryThinSpace", "\u{200A}"),
    Entity::new("Vfr", "\u{1D519}"),
    Entity::new("Vopf", "\u{1D54D}"),
    Entity::new("Vscr", "\u{1D4B1}"),
    Entity::new("Vvdash", "\u{22AA}"),
    Entity::new("Wcirc", "\u{174}"),
    Entity::new("Wedge", "\u{22C0}"),
    Entity::new("Wfr", "\u{1D51A}"),
    Entity::new("Wopf", "\u{1D54E}"),
    Entity::new("Wscr", "\u{1D4B2}"),
    Entity::new("Xfr", "\u{1D51B}"),
    Entity::new("Xi", "\u{39E}"),
    Entity::new("Xopf", "\u{1D54F}"),
    Entity::new("Xscr", "\u{1D4B3}"),
    Entity::new("YAcy", "\u{42F}"),
    Entity::new("YIcy", "\u{407}"),
    Entity::new("YUcy", "\u{42E}"),
    Entity::new("Yacute", "\u{DD}"),
    Entity::new("Ycirc", "\u{176}"),
    Entity::new("Ycy", "\u{42B}"),
    Entity::new("Yfr", "\u{1D51C}"),
    Entity::new("Yopf", "\u{1D550}"),
    Entity::new("Yscr", "\u{1D4B4}"),
    Entity::new("Yuml", "\u{178}"),
    Entity::new("ZHcy", "\u{416}"),
    Entity::new("Zacute", "\u{179}"),
    Entity::new("Zcaron", "\u{17D}"),
    Entity::new("Zcy", "\u{417}"),
    Entity::new("Zdot", "\u{17B}"),
    Entity::new("ZeroWidthSpace", "\u{200B}"),
    Entity::new("Zeta", "\u{396}"),
    Entity::new("Zfr", "\u{2128}"),
    Entity::new("Zopf", "\u{2124}"),
    Entity::new("Zscr", "\u{1D4B5}"),
    Entity::new("aacute", "\u{E1}"),
    Entity::new("abreve", "\u{103}"),
    Entity::new("ac", "\u{223E}"),
    Entity::new("acE", "\u{223E}\u{333}"),
    Entity::new("acd", "\u{223F}"),
    Entity::new("acirc", "\u{E2}"),
    Entity::new("acute", "\u{B4}"),
    Entity::new("acy", "\u{430}"),
    Entity::new("aelig", "\u{E6}"),
    Entity::new("af", "\u{2061}"),
    Entity::new("afr", "\u{1D51E}"),
    Entity::new("agrave", "\u{E0}"),
    Entity::new("alefsym", "\u{2135}"),
    Entity::new("aleph", "\u{2135}"),
    Entity::new("alpha", "\u{3B1}"),
    Entity::new("amacr", "\u{101}"),
    Entity::new("amalg", "\u{2A3F}"),
    Entity::new("amp", "&"),
    Entity::new("and", "\u{2227}"),
    Entity::new("andand", "\u{2A55}"),
    Entity::new("andd", "\u{2A5C}"),
    Entity::new("andslope", "\u{2A58}"),
    Entity::new("andv", "\u{2A5A}"),
    Entity::new("ang", "\u{2220}"),
    Entity::new("ange", "\u{29A4}"),
    Entity::new("angle", "\u{2220}"),
    Entity::new("angmsd", "\u{2221}"),
    Entity::new("angmsdaa", "\u{29A8}"),
    Entity::new("angmsdab", "\u{29A9}"),
    Entity::new("angmsdac", "\u{29AA}"),
    Entity::new("angmsdad", "\u{29AB}"),
    Entity::new("angmsdae", "\u{29AC}"),
    Entity::new("angmsdaf", "\u{29AD}"),
    Entity::new("angmsdag", "\u{29AE}"),
    Entity::new("angmsdah", "\u{29AF}"),
    Entity::new("angrt", "\u{221F}"),
    Entity::new("angrtvb", "\u{22BE}"),
    Entity::new("angrtvbd", "\u{299D}"),
    Entity::new("angsph", "\u{2222}"),
    Entity::new("angst", "\u{C5}"),
    Entity::new("angzarr", "\u{237C}"),
    Entity::new("aogon", "\u{105}"),
    Entity::new("aopf", "\u{1D552}"),
    Entity::new("ap", "\u{2248}"),
    Entity::new("apE", "\u{2A70}"),
    Entity::new("apacir", "\u{2A6F}"),
    Entity::new("ape", "\u{224A}"),
    Entity::new("apid", "\u{224B}"),
    Entity::new("apos", "'"),
    Entity::new("approx", "\u{2248}"),
    Entity::new("approxeq", "\u{224A}"),
    Entity::new("aring", "\u{E5}"),
    Entity::new("ascr", "\u{1D4B6}"),
    Entity::new("ast", "*"),
    Entity::new("asymp", "\u{2248}"),
    Entity::new("asympeq", "\u{224D}"),
    Entity::new("atilde", "\u{E3}"),
    Entity::new("auml", "\u{E4}"),
    Entity::new("awconint", "\u{2233}"),
    Entity::new("awint", "\u{2A11}"),
    Entity::new("bNot", "\u{2AED}"),
    Entity::new("backcong", "\u{224C}"),
    Entity::new("backepsilon", "\u{3F6}"),
    Entity::new("backprime", "\u{2035}"),
    Entity::new("backsim", "\u{223D}"),
    Entity::new("backsimeq", "\u{22CD}"),
    Entity::new("barvee", "\u{22BD}"),
    Entity::new("barwed", "\u{2305}"),
    Entity::new("barwedge", "\u{2305}"),
    Entity::new("bbrk", "\u{23B5}"),
    Entity::new("bbrktbrk", "\u{23B6}"),
    Entity::new("bcong", "\u{224C}"),
    Entity::new("bcy", "\u{431}"),
    Entity::new("bdquo", "\u{201E}"),
    Entity::new("becaus", "\u{2235}"),
    Entity::new("because", "\u{2235}"),
    Entity::new("bemptyv", "\u{29B0}"),
    Entity::new("bepsi", "\u{3F6}"),
    Entity::new("bernou", "\u{212C}"),
    Entity::new("beta", "\u{3B2}"),
    Entity::new("beth", "\u{2136}"),
    Entity::new("between", "\u{226C}"),
    Entity::new("bfr", "\u{1D51F}"),
    Entity::new("bigcap", "\u{22C2}"),
    Entity::new("bigcirc", "\u{25EF}"),
    Entity::new("bigcup", "\u{22C3}"),
    Entity::new("bigodot", "\u{2A00}"),
    Entity::new("bigoplus", "\u{2A01}"),
    Entity::new("bigotimes", "\u{2A02}"),
    Entity::new("bigsqcup", "\u{2A06}"),
    Entity::new("bigstar", "\u{2605}"),
    Entity::new("bigtriangledown", "\u{25BD}"),
    Entity::new("bigtriangleup", "\u{25B3}"),
    Entity::new("biguplus", "\u{2A04}"),
    Entity::new("bigvee", "\u{22C1}"),
    Entity::new("bigwedge", "\u{22C0}"),
    Entity::new("bkarow", "\u{290D}"),
    Entity::new("blacklozenge", "\u{29EB}"),
    Entity::new("blacksquare", "\u{25AA}"),
    Entity::new("blacktriangle", "\u{25B4}"),
    Entity::new("blacktriangledown", "\u{25BE}"),
    Entity::new("blacktriangleleft", "\u{25C2}"),
    Entity::new("blacktriangleright", "\u{25B8}"),
    Entity::new("blank", "\u{2423}"),
    Entity::new("blk12", "\u{2592}"),
    Entity::new("blk14", "\u{2591}"),
    Entity::new("blk34", "\u{2593}"),
    Entity::new("block", "\u{2588}"),
    Entity::new("bne", "=\u{20E5}"),
    Entity::new("bnequiv", "\u{2261}\u{20E5}"),
    Entity::new("bnot", "\u{2310}"),
    Entity::new("bopf", "\u{1D553}"),
    Entity::new("bot", "\u{22A5}"),
    Entity::new("bottom", "\u{22A5}"),
    Entity::new("bowtie", "\u{22C8}"),
    Entity::new("boxDL", "\u{2557}"),
    Entity::new("boxDR", "\u{2554}"),
    Entity::new("boxDl", "\u{2556}"),
    Entity::new("boxDr", "\u{2553}"),
    Entity::new("boxH", "\u{2550}"),
    Entity::new("boxHD", "\u{2566}"),
    Entity::new("boxHU", "\u{2569}"),
    Entity::new("boxHd", "\u{2564}"),
    Entity::new("boxHu", "\u{2567}"),
    Entity::new("boxUL", "\u{255D}"),
    Entity::new("boxUR", "\u{255A}"),
    Entity::new("boxUl", "\u{255C}"),
    Entity::new("boxUr", "\u{2559}"),
    Entity::new("boxV", "\u{2551}"),
    Entity::new("boxVH", "\u{256C}"),
    Entity::new("boxVL", "\u{2563}"),
    Entity::new("boxVR", "\u{2560}"),
    Entity::new("boxVh", "\u{256B}"),
    Entity::new("boxVl", "\u{2562}"),
    Entity::new("boxVr", "\u{255F}"),
    Entity::new("boxbox", "\u{29C9}"),
    Entity::new("boxdL", "\u{2555}"),
    Entity::new("boxdR", "\u{2552}"),
    Entity::new("boxdl", "\u{2510}"),
    Entity::new("boxdr", "\u{250C}"),
    Entity::new("boxh", "\u{2500}"),
    Entity::new("boxhD", "\u{2565}"),
    Entity::new("boxhU", "\u{2568}"),
    Entity::new("boxhd", "\u{252C}"),
    Entity::new("boxhu", "\u{2534}"),
    Entity::new("boxminus", "\u{229F}"),
    Entity::new("boxplus", "\u{229E}"),
    Entity::new("boxtimes", "\u{22A0}"),
    Entity::new("boxuL", "\u{255B}"),
    Entity::new("boxuR", "\u{2558}"),
    Entity::new("boxul", "\u{2518}"),
    Entity::new("boxur", "\u{2514}"),
    Entity::new("boxv", "\u{2502}"),
    Entity::new("boxvH", "\u{256A}"),
    Entity::new("boxvL", "\u{2561}"),
    Entity::new("boxvR", "\u{255E}"),
    Entity::new("boxvh", "\u{253C}"),
    Entity::new("boxvl", "\u{2524}"),
    Entity::new("boxvr", "\u{251C}"),
    Entity::new("bprime", "\u{2035}"),
    Entity::new("breve", "\u{2D8}"),
    Entity::new("brvbar", "\u{A6}"),
    Entity::new("bscr", "\u{1D4B7}"),
    Entity::new("bsemi", "\u{204F}"),
    Entity::new("bsim", "\u{223D}"),
    Entity::new("bsime", "\u{22CD}"),
    Entity::new("bsol", "\\"),
    Entity::new("bsolb", "\u{29C5}"),
    Entity::new("bsolhsub", "\u{27C8}"),
    Entity::new("bull", "\u{2022}"),
    Entity::new("bullet", "\u{2022}"),
    Entity::new("bump", "\u{224E}"),
    Entity::new("bumpE", "\u{2AAE}"),
    Entity::new("bumpe", "\u{224F}"),
    Entity::new("bumpeq", "\u{224F}"),
    Entity::new("cacute", "\u{107}"),
    Entity::new("cap", "\u{2229}"),
    Entity::new("capand", "\u{2A44}"),
    Entity::new("capbrcup", "\u{2A49}"),
    Entity::new("capcap", "\u{2A4B}"),
    Entity::new("capcup", "\u{2A47}"),
    Entity::new("capdot", "\u{2A40}"),
    Entity::new("caps", "\u{2229}\u{FE00}"),
    Entity::new("caret", "\u{2041}"),
    Entity::new("caron", "\u{2C7}"),
    Entity::new("ccaps", "\u{2A4D}"),
    Entity::new("ccaron", "\u{10D}"),
    Entity::new("ccedil", "\u{E7}"),
    Entity::new("ccirc", "\u{109}"),
    Entity::new("ccups", "\u{2A4C}"),
    Entity::new("ccupssm", "\u{2A50}"),
    Entity::new("cdot", "\u{10B}"),
    Entity::new("cedil", "\u{B8}"),
    Entity::new("cemptyv", "\u{29B2}"),
    Entity::new("cent", "\u{A2}"),
    Entity::new("centerdot", "\u{B7}"),
    Entity::new("cfr", "\u{1D520}"),
    Entity::new("chcy", "\u{447}"),
    Entity::new("check", "\u{2713}"),
    Entity::new("checkmark", "\u{2713}"),
    Entity::new("chi", "\u{3C7}"),
    Entity::new("cir", "\u{25CB}"),
    Entity::new("cirE", "\u{29C3}"),
    Entity::new("circ", "\u{2C6}"),
    Entity::new("circeq", "\u{2257}"),
    Entity::new("circlearrowleft", "\u{21BA}"),
    Entity::new("circlearrowright", "\u{21BB}"),
    Entity::new("circledR", "\u{AE}"),
    Entity::new("circledS", "\u{24C8}"),
    Entity::new("circledast", "\u{229B}"),
    Entity::new("circledcirc", "\u{229A}"),
    Entity::new("circleddash", "\u{229D}"),
    Entity::new("cire", "\u{2257}"),
    Entity::new("cirfnint", "\u{2A10}"),
    Entity::new("cirmid", "\u{2AEF}"),
    Entity::new("cirscir", "\u{29C2}"),
    Entity::new("clubs", "\u{2663}"),
    Entity::new("clubsuit", "\u{2663}"),
    Entity::new("colon", ":"),
    Entity::new("colone", "\u{2254}"),
    Entity::new("coloneq", "\u{2254}"),
    Entity::new("comma", ","),
    Entity::new("commat", "@"),
    Entity::new("comp", "\u{2201}"),
    Entity::new("compfn", "\u{2218}"),
    Entity::new("complement", "\u{2201}"),
    Entity::new("complexes", "\u{2102}"),
    Entity::new("cong", "\u{2245}"),
    Entity::new("congdot", "\u{2A6D}"),
    Entity::new("conint", "\u{222E}"),
    Entity::new("copf", "\u{1D554}"),
    Entity::new("coprod", "\u{2210}"),
    Entity::new("copy", "\u{A9}"),
    Entity::new("copysr", "\u{2117}"),
    Entity::new("crarr", "\u{21B5}"),
    Entity::new("cross", "\u{2717}"),
    Entity::new("cscr", "\u{1D4B8}"),
    Entity::new("csub", "\u{2ACF}"),
    Entity::new("csube", "\u{2AD1}"),
    Entity::new("csup", "\u{2AD0}"),
    Entity::new("csupe", "\u{2AD2}"),
    Entity::new("ctdot", "\u{22EF}"),
    Entity::new("cudarrl", "\u{2938}"),
    Entity::new("cudarrr", "\u{2935}"),
    Entity::new("cuepr", "\u{22DE}"),
    Entity::new("cuesc", "\u{22DF}"),
    Entity::new("cularr", "\u{21B6}"),
    Entity::new("cularrp", "\u{293D}"),
    Entity::new("cup", "\u{222A}"),
    Entity::new("cupbrcap", "\u{2A48}"),
    Entity::new("cupcap", "\u{2A46}"),
    Entity::new("cupcup", "\u{2A4A}"),
    Entity::new("cupdot", "\u{228D}"),
    Entity::new("cupor", "\u{2A45}"),
    Entity::new("cups", "\u{222A}\u{FE00}"),
    Entity::new("curarr", "\u{21B7}"),
    Entity::new("curarrm", "\u{293C}"),
    Entity::new("curlyeqprec", "\u{22DE}"),
    Entity::new("curlyeqsucc", "\u{22DF}"),
    Entity::new("curlyvee", "\u{22CE}"),
    Entity::new("curlywedge", "\u{22CF}"),
    Entity::new("curren", "\u{A4}"),
    Entity::new("curvearrowleft", "\u{21B6}"),
    Entity::new("curvearrowright", "\u{21B7}"),
    Entity::new("cuvee", "\u{22CE}"),
    Entity::new("cuwed", "\u{22CF}"),
    Entity::new("cwconint", "\u{2232}"),
    Entity::new("cwint", "\u{2231}"),
    Entity::new("cylcty", "\u{232D}"),
    Entity::new("dArr", "\u{21D3}"),
    Entity::new("dHar", "\u{2965}"),
    Entity::new("dagger", "\u{2020}"),
    Entity::new("daleth", "\u{2138}"),
    Entity::new("darr", "\u{2193}"),
    Entity::new("dash", "\u{2010}"),
    Entity::new("dashv", "\u{22A3}"),
    Entity::new("dbkarow", "\u{290F}"),
    Entity::new("dblac", "\u{2DD}"),
    Entity::new("dcaron", "\u{10F}"),
    Entity::new("dcy", "\u{434}"),
    Entity::new("dd", "\u{2146}"),
    Entity::new("ddagger", "\u{2021}"),
    Entity::new("ddarr", "\u{21CA}"),
    Entity::new("ddotseq", "\u{2A77}"),
    Entity::new("deg", "\u{B0}"),
    Entity::new("delta", "\u{3B4}"),
    Entity::new("demptyv", "\u{29B1}"),
    Entity::new("dfisht", "\u{297F}"),
    Entity::new("dfr", "\u{1D521}"),
    Entity::new("dharl", "\u{21C3}"),
    Entity::new("dharr", "\u{21C2}"),
    Entity::new("diam", "\u{22C4}"),
    Entity::new("diamond", "\u{22C4}"),
    Entity::new("diamondsuit", "\u{2666}"),
    Entity::new("diams", "\u{2666}"),
    Entity::new("die", "\u{A8}"),
    Entity::new("digamma", "\u{3DD}"),
    Entity::new("disin", "\u{22F2}"),
    Entity::new("div", "\u{F7}"),
    Entity::new("divide", "\u{F7}"),
    Entity::new("divideontimes", "\u{22C7}"),
    Entity::new("divonx", "\u{22C7}"),
    Entity::new("djcy", "\u{452}"),
    Entity::new("dlcorn", "\u{231E}"),
    Entity::new("dlcrop", "\u{230D}"),
    Entity::new("dollar", "$"),
    Entity::new("dopf", "\u{1D555}"),
    Entity::new("dot", "\u{2D9}"),
    Entity::new("doteq", "\u{2250}"),
    Entity::new("doteqdot", "\u{2251}"),
    Entity::new("dotminus", "\u{2238}"),
    Entity::new("dotplus", "\u{2214}"),
    Entity::new("dotsquare", "\u{22A1}"),
    Entity::new("doublebarwedge", "\u{2306}"),
    Entity::new("downarrow", "\u{2193}"),
    Entity::new("downdownarrows", "\u{21CA}"),
    Entity::new("downharpoonleft", "\u{21C3}"),
    Entity::new("downharpoonright", "\u{21C2}"),
    Entity::new("drbkarow", "\u{2910}"),
    Entity::new("drcorn", "\u{231F}"),
    Entity::new("drcrop", "\u{230C}"),
    Entity::new("dscr", "\u{1D4B9}"),
    Entity::new("dscy", "\u{455}"),
    Entity::new("dsol", "\u{29F6}"),
    Entity::new("dstrok", "\u{111}"),
    Entity::new("dtdot", "\u{22F1}"),
    Entity::new("dtri", "\u{25BF}"),
    Entity::new("dtrif", "\u{25BE}"),
    Entity::new("duarr", "\u{21F5}"),
    Entity::new("duhar", "\u{296F}"),
    Entity::new("dwangle", "\u{29A6}"),
    Entity::new("dzcy", "\u{45F}"),
    Entity::new("dzigrarr", "\u{27FF}"),
    Entity::new("eDDot", "\u{2A77}"),
    Entity::new("eDot", "\u{2251}"),
    Entity::new("eacute", "\u{E9}"),
    Entity::new("easter", "\u{2A6E}"),
    Entity::new("ecaron", "\u{11B}"),
    Entity::new("ecir", "\u{2256}"),
    Entity::new("ecirc", "\u{EA}"),
    Entity::new("ecolon", "\u{2255}"),
    Entity::new("ecy", "\u{44D}"),
    Entity::new("edot", "\u{117}"),
    Entity::new("ee", "\u{2147}"),
    Entity::new("efDot", "\u{2252}"),
    Entity::new("efr", "\u{1D522}"),
    Entity::new("eg", "\u{2A9A}"),
    Entity::new("egrave", "\u{E8}"),
    Entity::new("egs", "\u{2A96}"),
    Entity::new("egsdot", "\u{2A98}"),
    Entity::new("el", "\u{2A99}"),
    Entity::new("elinters", "\u{23E7}"),
    Entity::new("ell", "\u{2113}"),
    Entity::new("els", "\u{2A95}"),
    Entity::new("elsdot", "\u{2A97}"),
    Entity::new("emacr", "\u{113}"),
    Entity::new("empty", "\u{2205}"),
    Entity::new("emptyset", "\u{2205}"),
    Entity::new("emptyv", "\u{2205}"),
    Entity::new("emsp", "\u{2003}"),
    Entity::new("emsp13", "\u{2004}"),
    Entity::new("emsp14", "\u{2005}"),
    Entity::new("eng", "\u{14B}"),
    Entity::new("ensp", "\u{2002}"),
    Entity::new("eogon", "\u{119}"),
    Entity::new("eopf", "\u{1D556}"),
    Entity::new("epar", "\u{22D5}"),
    Entity::new("eparsl", "\u{29E3}"),
    Entity::new("eplus", "\u{2A71}"),
    Entity::new("epsi", "\u{3B5}"),
    Entity::new("epsilon", "\u{3B5}"),
    Entity::new("epsiv", "\u{3F5}"),
    Entity::new("eqcirc", "\u{2256}"),
    Entity::new("eqcolon", "\u{2255}"),
    Entity::new("eqsim", "\u{2242}"),
    Entity::new("eqslantgtr", "\u{2A96}"),
    Entity::new("eqslantless", "\u{2A95}"),
    Entity::new("equals", "="),
    Entity::new("equest", "\u{225F}"),
    Entity::new("equiv", "\u{2261}"),
    Entity::new("equivDD", "\u{2A78}"),
    Entity::new("eqvparsl", "\u{29E5}"),
    Entity::new("erDot", "\u{2253}"),
    Entity::new("erarr", "\u{2971}"),
    Entity::new("escr", "\u{212F}"),
    Entity::new("esdot", "\u{2250}"),
    Entity::new("esim", "\u{2242}"),
    Entity::new("eta", "\u{3B7}"),
    Entity::new("eth", "\u{F0}"),
    Entity::new("euml", "\u{EB}"),
    Entity::new("euro", "\u{20AC}"),
    Entity::new("excl", "!"),
    Entity::new("exist", "\u{2203}"),
    Entity::new("expectation", "\u{2130}"),
    Entity::new("exponentiale", "\u{2147}"),
    Entity::new("fallingdotseq", "\u{2252}"),
    Entity::new("fcy", "\u{444}"),
    Entity::new("female", "\u{2640}"),
    Entity::new("ffilig", "\u{FB03}"),
    Entity::new("fflig", "\u{FB00}"),
    Entity::new("ffllig", "\u{FB04}"),
    Entity::new("ffr", "\u{1D523}"),
    Entity::new("filig", "\u{FB01}"),
    Entity::new("fjlig", "fj"),
    Entity::new("flat", "\u{266D}"),
    Entity::new("fllig", "\u{FB02}"),
    Entity::new("fltns", "\u{25B1}"),
    Entity::new("fnof", "\u{192}"),
    Entity::new("fopf", "\u{1D557}"),
    Entity::new("forall", "\u{2200}"),
    Entity::new("fork", "\u{22D4}"),
    Entity::new("forkv", "\u{2AD9}"),
    Entity::new("fpartint", "\u{2A0D}"),
    Entity::new("frac12", "\u{BD}"),
    Entity::new("frac13", "\u{2153}"),
    Entity::new("frac14", "\u{BC}"),
    Entity::new("frac15", "\u{2155}"),
    Entity::new("frac16", "\u{2159}"),
    Entity::new("frac18", "\u{215B}"),
    Entity::new("frac23", "\u{2154}"),
    Entity::new("frac25", "\u{2156}"),
    Entity::new("frac34", "\u{BE}"),
    Entity::new("frac35", "\u{2157}"),
    Entity::new("frac38", "\u{215C}"),
    Entity::new("frac45", "\u{2158}"),
    Entity::new("frac56", "\u{215A}"),
    Entity::new("frac58", "\u{215D}"),
    Entity::new("frac78", "\u{215E}"),
    Entity::new("frasl", "\u{2044}"),
    Entity::new("frown", "\u{2322}"),
    Entity::new("fscr", "\u{1D4BB}"),
    Entity::new("gE", "\u{2267}"),
    Entity::new("gEl", "\u{2A8C}"),
    Entity::new("gacute", "\u{1F5}"),
    Entity::new("gamma", "\u{3B3}"),
    Entity::new("gammad", "\u{3DD}"),
    Entity::new("gap", "\u{2A86}"),
    Entity::new("gbreve", "\u{11F}"),
    Entity::new("gcirc", "\u{11D}"),
    Entity::new("gcy", "\u{433}"),
    Entity::new("gdot", "\u{121}"),
    Entity::new("ge", "\u{2265}"),
    Entity::new("gel", "\u{22DB}"),
    Entity::new("geq", "\u{2265}"),
    Entity::new("geqq", "\u{2267}"),
    Entity::new("geqslant", "\u{2A7E}"),
    Entity::new("ges", "\u{2A7E}"),
    Entity::new("gescc", "\u{2AA9}"),
    Entity::new("gesdot", "\u{2A80}"),
    Entity::new("gesdoto", "\u{2A82}"),
    Entity::new("gesdotol", "\u{2A84}"),
    Entity::new("gesl", "\u{22DB}\u{FE00}"),
    Entity::new("gesles", "\u{2A94}"),
    Entity::new("gfr", "\u{1D524}"),
    Entity::new("gg", "\u{226B}"),
    Entity::new("ggg", "\u{22D9}"),
    Entity::new("gimel", "\u{2137}"),
    Entity::new("gjcy", "\u{453}"),
    Entity::new("gl", "\u{2277}"),
    Entity::new("glE", "\u{2A92}"),
    Entity::new("gla", "\u{2AA5}"),
    Entity::new("glj", "\u{2AA4}"),
    Entity::new("gnE", "\u{2269}"),
    Entity::new("gnap", "\u{2A8A}"),
    Entity::new("gnapprox", "\u{2A8A}"),
    Entity::new("gne", "\u{2A88}"),
    Entity::new("gneq", "\u{2A88}"),
    Entity::new("gneqq", "\u{2269}"),
    Entity::new("gnsim", "\u{22E7}"),
    Entity::new("gopf", "\u{1D558}"),
    Entity::new("grave", "`"),
    Entity::new("gscr", "\u{210A}"),
    Entity::new("gsim", "\u{2273}"),
    Entity::new("gsime", "\u{2A8E}"),
    Entity::new("gsiml", "\u{2A90}"),
    Entity::new("gt", ">"),
    Entity::new("gtcc", "\u{2AA7}"),
    Entity::new("gtcir", "\u{2A7A}"),
    Entity::new("gtdot", "\u{22D7}"),
    Entity::new("gtlPar", "\u{2995}"),
    Entity::new("gtquest", "\u{2A7C}"),
    Entity::new("gtrapprox", "\u{2A86}"),
    Entity::new("gtrarr", "\u{2978}"),
    Entity::new("gtrdot", "\u{22D7}"),
    Entity::new("gtreqless", "\u{22DB}"),
    Entity::new("gtreqqless", "\u{2A8C}"),
    Entity::new("gtrless", "\u{2277}"),
    Entity::new("gtrsim", "\u{2273}"),
    Entity::new("gvertneqq", "\u{2269}\u{FE00}"),
    Entity::new("gvnE", "\u{2269}\u{FE00}"),
    Entity::new("hArr", "\u{21D4}"),
    Entity::new("hairsp", "\u{200A}"),
    Entity::new("half", "\u{BD}"),
    Entity::new("hamilt", "\u{210B}"),
    Entity::new("hardcy", "\u{44A}"),
    Entity::new("harr", "\u{2194}"),
    Entity::new("harrcir", "\u{2948}"),
    Entity::new("harrw", "\u{21AD}"),
    Entity::new("hbar", "\u{210F}"),
    Entity::new("hcirc", "\u{125}"),
    Entity::new("hearts", "\u{2665}"),
    Entity::new("heartsuit", "\u{2665}"),
    Entity::new("hellip", "\u{2026}"),
    Entity::new("hercon", "\u{22B9}"),
    Entity::new("hfr", "\u{1D525}"),
    Entity::new("hksearow", "\u{2925}"),
    Entity::new("hkswarow", "\u{2926}"),
    Entity::new("hoarr", "\u{21FF}"),
    Entity::new("homtht", "\u{223B}"),
    Entity::new("hookleftarrow", "\u{21A9}"),
    Entity::new("hookrightarrow", "\u{21AA}"),
    Entity::new("hopf", "\u{1D559}"),
    Entity::new("horbar", "\u{2015}"),
    Entity::new("hscr", "\u{1D4BD}"),
    Entity::new("hslash", "\u{210F}"),
    Entity::new("hstrok", "\u{127}"),
    Entity::new("hybull", "\u{2043}"),
    Entity::new("hyphen", "\u{2010}"),
    Entity::new("iacute", "\u{ED}"),
    Entity::new("ic", "\u{2063}"),
    Entity::new("icirc", "\u{EE}"),
    Entity::new("icy", "\u{438}"),
    Entity::new("iecy", "\u{435}"),
    Entity::new("iexcl", "\u{A1}"),
    Entity::new("iff", "\u{21D4}"),
    Entity::new("ifr", "\u{1D526}"),
    Entity::new("igrave", "\u{EC}"),
    Entity::new("ii", "\u{2148}"),
    Entity::new("iiiint", "\u{2A0C}"),
    Entity::new("iiint", "\u{222D}"),
    Entity::new("iinfin", "\u{29DC}"),
    Entity::new("iiota", "\u{2129}"),
    Entity::new("ijlig", "\u{133}"),
    Entity::new("imacr", "\u{12B}"),
    Entity::new("image", "\u{2111}"),
    Entity::new("imagline", "\u{2110}"),
    Entity::new("imagpart", "\u{2111}"),
    Entity::new("imath", "\u{131}"),
    Entity::new("imof", "\u{22B7}"),
    Entity::new("imped", "\u{1B5}"),
    Entity::new("in", "\u{2208}"),
    Entity::new("incare", "\u{2105}"),
    Entity::new("infin", "\u{221E}"),
    Entity::new("infintie", "\u{29DD}"),
    Entity::new("inodot", "\u{131}"),
    Entity::new("int", "\u{222B}"),
    Entity::new("intcal", "\u{22BA}"),
    Entity::new("integers", "\u{2124}"),
    Entity::new("intercal", "\u{22BA}"),
    Entity::new("intlarhk", "\u{2A17}"),
    Entity::new("intprod", "\u{2A3C}"),
    Entity::new("iocy", "\u{451}"),
    Entity::new("iogon", "\u{12F}"),
    Entity::new("iopf", "\u{1D55A}"),
    Entity::new("iota", "\u{3B9}"),
    Entity::new("iprod", "\u{2A3C}"),
    Entity::new("iquest", "\u{BF}"),
    Entity::new("iscr", "\u{1D4BE}"),
    Entity::new("isin", "\u{2208}"),
    Entity::new("isinE", "\u{22F9}"),
    Entity::new("isindot", "\u{22F5}"),
    Entity::new("isins", "\u{22F4}"),
    Entity::new("isinsv", "\u{22F3}"),
    Entity::new("isinv", "\u{2208}"),
    Entity::new("it", "\u{2062}"),
    Entity::new("itilde", "\u{129}"),
    Entity::new("iukcy", "\u{456}"),
    Entity::new("iuml", "\u{EF}"),
    Entity::new("jcirc", "\u{135}"),
    Entity::new("jcy", "\u{439}"),
    Entity::new("jfr", "\u{1D527}"),
    Entity::new("jmath", "\u{237}"),
    Entity::new("jopf", "\u{1D55B}"),
    Entity::new("jscr", "\u{1D4BF}"),
    Entity::new("jsercy", "\u{458}"),
    Entity::new("jukcy", "\u{454}"),
    Entity::new("kappa", "\u{3BA}"),
    Entity::new("kappav", "\u{3F0}"),
    Entity::new("kcedil", "\u{137}"),
    Entity::new("kcy", "\u{43A}"),
    Entity::new("kfr", "\u{1D528}"),
    Entity::new("kgreen", "\u{138}"),
    Entity::new("khcy", "\u{445}"),
    Entity::new("kjcy", "\u{45C}"),
    Entity::new("kopf", "\u{1D55C}"),
    Entity::new("kscr", "\u{1D4C0}"),
    Entity::new("lAarr", "\u{21DA}"),
    Entity::new("lArr", "\u{21D0}"),
    Entity::new("lAtail", "\u{291B}"),
    Entity::new("lBarr", "\u{290E}"),
    Entity::new("lE", "\u{2266}"),
    Entity::new("lEg", "\u{2A8B}"),
    Entity::new("lHar", "\u{2962}"),
    Entity::new("lacute", "\u{13A}"),
    Entity::new("laemptyv", "\u{29B4}"),
    Entity::new("lagran", "\u{2112}"),
    Entity::new("lambda", "\u{3BB}"),
    Entity::new("lang", "\u{27E8}"),
    Entity::new("langd", "\u{2991}"),
    Entity::new("langle", "\u{27E8}"),
    Entity::new("lap", "\u{2A85}"),
    Entity::new("laquo", "\u{AB}"),
    Entity::new("larr", "\u{2190}"),
    Entity::new("larrb", "\u{21E4}"),
    Entity::new("larrbfs", "\u{291F}"),
    Entity::new("larrfs", "\u{291D}"),
    Entity::new("larrhk", "\u{21A9}"),
    Entity::new("larrlp", "\u{21AB}"),
    Entity::new("larrpl", "\u{2939}"),
    Entity::new("larrsim", "\u{2973}"),
    Entity::new("larrtl", "\u{21A2}"),
    Entity::new("lat", "\u{2AAB}"),
    Entity::new("latail", "\u{2919}"),
    Entity::new("late", "\u{2AAD}"),
    Entity::new("lates", "\u{2AAD}\u{FE00}"),
    Entity::new("lbarr", "\u{290C}"),
    Entity::new("lbbrk", "\u{2772}"),
    Entity::new("lbrace", "{"),
    Entity::new("lbrack", "["),
    Entity::new("lbrke", "\u{298B}"),
    Entity::new("lbrksld", "\u{298F}"),
    Entity::new("lbrkslu", "\u{298D}"),
    Entity::new("lcaron", "\u{13E}"),
    Entity::new("lcedil", "\u{13C}"),
    Entity::new("lceil", "\u{2308}"),
    Entity::new("lcub", "{"),
    Entity::new("lcy", "\u{43B}"),
    Entity::new("ldca", "\u{2936}"),
    Entity::new("ldquo", "\u{201C}"),
    Entity::new("ldquor", "\u{201E}"),
    Entity::new("ldrdhar", "\u{2967}"),
    Entity::new("ldrushar", "\u{294B}"),
    Entity::new("ldsh", "\u{21B2}"),
    Entity::new("le", "\u{2264}"),
    Entity::new("leftarrow", "\u{2190}"),
    Entity::new("leftarrowtail", "\u{21A2}"),
    Entity::new("leftharpoondown", "\u{21BD}"),
    Entity::new("leftharpoonup", "\u{21BC}"),
    Entity::new("leftleftarrows", "\u{21C7}"),
    Entity::new("leftrightarrow", "\u{2194}"),
    Entity::new("leftrightarrows", "\u{21C6}"),
    Entity::new("leftrightharpoons", "\u{21CB}"),
    Entity::new("leftrightsquigarrow", "\u{21AD}"),
    Entity::new("leftthreetimes", "\u{22CB}"),
    Entity::new("leg", "\u{22DA}"),
    Entity::new("leq", "\u{2264}"),
    Entity::new("leqq", "\u{2266}"),
    Entity::new("leqslant", "\u{2A7D}"),
    Entity::new("les", "\u{2A7D}"),
    Entity::new("lescc", "\u{2AA8}"),
    Entity::new("lesdot", "\u{2A7F}"),
    Entity::new("lesdoto", "\u{2A81}"),
    Entity::new("lesdotor", "\u{2A83}"),
    Entity::new("lesg", "\u{22DA}\u{FE00}"),
    Entity::new("lesges", "\u{2A93}"),
    Entity::new("lessapprox", "\u{2A85}"),
    Entity::new("lessdot", "\u{22D6}"),
    Entity::new("lesseqgtr", "\u{22DA}"),
    Entity::new("lesseqqgtr", "\u{2A8B}"),
    Entity::new("lessgtr", "\u{2276}"),
    Entity::new("lesssim", "\u{2272}"),
    Entity::new("lfisht", "\u{297C}"),
    Entity::new("lfloor", "\u{230A}"),
    Entity::new("lfr", "\u{1D529}"),
    Entity::new("lg", "\u{2276}"),
    Entity::new("lgE", "\u{2A91}"),
    Entity::new("lhard", "\u{21BD}"),
    Entity::new("lharu", "\u{21BC}"),
    Entity::new("lharul", "\u{296A}"),
    Entity::new("lhblk", "\u{2584}"),
    Entity::new("ljcy", "\u{459}"),
    Entity::new("ll", "\u{226A}"),
    Entity::new("llarr", "\u{21C7}"),
    Entity::new("llcorner", "\u{231E}"),
    Entity::new("llhard", "\u{296B}"),
    Entity::new("lltri", "\u{25FA}"),
    Entity::new("lmidot", "\u{140}"),
    Entity::new("lmoust", "\u{23B0}"),
    Entity::new("lmoustache", "\u{23B0}"),
    Entity::new("lnE", "\u{2268}"),
    Entity::new("lnap", "\u{2A89}"),
    Entity::new("lnapprox", "\u{2A89}"),
    Entity::new("lne", "\u{2A87}"),
    Entity::new("lneq", "\u{2A87}"),
    Entity::new("lneqq", "\u{2268}"),
    Entity::new("lnsim", "\u{22E6}"),
    Entity::new("loang", "\u{27EC}"),
    Entity::new("loarr", "\u{21FD}"),
    Entity::new("lobrk", "\u{27E6}"),
    Entity::new("longleftarrow", "\u{27F5}"),
    Entity::new("longleftrightarrow", "\u{27F7}"),
    Entity::new("longmapsto", "\u{27FC}"),
    Entity::new("longrightarrow", "\u{27F6}"),
    Entity::new("looparrowleft", "\u{21AB}"),
    Entity::new("looparrowright", "\u{21AC}"),
    Entity::new("lopar", "\u{2985}"),
    Entity::new("lopf", "\u{1D55D}"),
    Entity::new("loplus", "\u{2A2D}"),
    Entity::new("lotimes", "\u{2A34}"),
    Entity::new("lowast", "\u{2217}"),
    Entity::new("lowbar", "_"),
    Entity::new("loz", "\u{25CA}"),
    Entity::new("lozenge", "\u{25CA}"),
    Entity::new("lozf", "\u{29EB}"),
    Entity::new("lpar", "("),
    Entity::new("lparlt", "\u{2993}"),
    Entity::new("lrarr", "\u{21C6}"),
    Entity::new("lrcorner", "\u{231F}"),
    Entity::new("lrhar", "\u{21CB}"),
    Entity::new("lrhard", "\u{296D}"),
    Entity::new("lrm", "\u{200E}"),
    Entity::new("lrtri", "\u{22BF}"),
    Entity::new("lsaquo", "\u{2039}"),
    Entity::new("lscr", "\u{1D4C1}"),
    Entity::new("lsh", "\u{21B0}"),
    Entity::new("lsim", "\u{2272}"),
    Entity::new("lsime", "\u{2A8D}"),
    Entity::new("lsimg", "\u{2A8F}"),
    Entity::new("lsqb", "["),
    Entity::new("lsquo", "\u{2018}"),
    Entity::new("lsquor", "\u{201A}"),
    Entity::new("lstrok", "\u{142}"),
    Entity::new("lt", "<"),
    Entity::new("ltcc", "\u{2AA6}"),
    Entity::new("ltcir", "\u{2A79}"),
    Entity::new("ltdot", "\u{22D6}"),
    Entity::new("lthree", "\u{22CB}"),
    Entity::new("ltimes", "\u{22C9}"),
    Entity::new("ltlarr", "\u{2976}"),
    Entity::new("ltquest", "\u{2A7B}"),
    Entity::new("ltrPar", "\u{2996}"),
    Entity::new("ltri", "\u{25C3}"),
    Entity::new("ltrie", "\u{22B4}"),
    Entity::new("ltrif", "\u{25C2}"),
    Entity::new("lurdshar", "\u{294A}"),
    Entity::new("luruhar", "\u{2966}"),
    Entity::new("lvertneqq", "\u{2268}\u{FE00}"),
    Entity::new("lvnE", "\u{2268}\u{FE00}"),
    Entity::new("mDDot", "\u{223A}"),
    Entity::new("macr", "\u{AF}"),
    Entity::new("male", "\u{2642}"),
    Entity::new("malt", "\u{2720}"),
    Entity::new("maltese", "\u{2720}"),
    Entity::new("map", "\u{21A6}"),
    Entity::new("mapsto", "\u{21A6}"),
    Entity::new("mapstodown", "\u{21A7}"),
    Entity::new("mapstoleft", "\u{21A4}"),
    Entity::new("mapstoup", "\u{21A5}"),
    Entity::new("marker", "\u{25AE}"),
    Entity::new("mcomma", "\u{2A29}"),
    Entity::new("mcy", "\u{43C}"),
    Entity::new("mdash", "\u{2014}"),
    Entity::new("measuredangle", "\u{2221}"),
    Entity::new("mfr", "\u{1D52A}"),
    Entity::new("mho", "\u{2127}"),
    Entity::new("micro", "\u{B5}"),
    Entity::new("mid", "\u{2223}"),
    Entity::new("midast", "*"),
    Entity::new("midcir", "\u{2AF0}"),
    Entity::new("middot", "\u{B7}"),
    Entity::new("minus", "\u{2212}"),
    Entity::new("minusb", "\u{229F}"),
    Entity::new("minusd", "\u{2238}"),
    Entity::new("minusdu", "\u{2A2A}"),
    Entity::new("mlcp", "\u{2ADB}"),
    Entity::new("mldr", "\u{2026}"),
    Entity::new("mnplus", "\u{2213}"),
    Entity::new("models", "\u{22A7}"),
    Entity::new("mopf", "\u{1D55E}"),
    Entity::new("mp", "\u{2213}"),
    Entity::new("mscr", "\u{1D4C2}"),
    Entity::new("mstpos", "\u{223E}"),
    Entity::new("mu", "\u{3BC}"),
    Entity::new("multimap", "\u{22B8}"),
    Entity::new("mumap", "\u{22B8}"),
    Entity::new("nGg", "\u{22D9}\u{338}"),
    Entity::new("nGt", "\u{226B}\u{20D2}"),
    Entity::new("nGtv", "\u{226B}\u{338}"),
    Entity::new("nLeftarrow", "\u{21CD}"),
    Entity::new("nLeftrightarrow", "\u{21CE}"),
    Entity::new("nLl", "\u{22D8}\u{338}"),
    Entity::new("nLt", "\u{226A}\u{20D2}"),
    Entity::new("nLtv", "\u{226A}\u{338}"),
    Entity::new("nRightarrow", "\u{21CF}"),
    Entity::new("nVDash", "\u{22AF}"),
    Entity::new("nVdash", "\u{22AE}"),
    Entity::new("nabla", "\u{2207}"),
    Entity::new("nacute", "\u{144}"),
    Entity::new("nang", "\u{2220}\u{20D2}"),
    Entity::new("nap", "\u{2249}"),
    Entity::new("napE", "\u{2A70}\u{338}"),
    Entity::new("napid", "\u{224B}\u{338}"),
    Entity::new("napos", "\u{149}"),
    Entity::new("napprox", "\u{2249}"),
    Entity::new("natur", "\u{266E}"),
    Entity::new("natural", "\u{266E}"),
    Entity::new("naturals", "\u{2115}"),
    Entity::new("nbsp", "\u{A0}"),
    Entity::new("nbump", "\u{224E}\u{338}"),
    Entity::new("nbumpe", "\u{224F}\u{338}"),
    Entity::new("ncap", "\u{2A43}"),
    Entity::new("ncaron", "\u{148}"),
    Entity::new("ncedil", "\u{146}"),
    Entity::new("ncong", "\u{2247}"),
    Entity::new("ncongdot", "\u{2A6D}\u{338}"),
    Entity::new("ncup", "\u{2A42}"),
    Entity::new("ncy", "\u{43D}"),
    Entity::new("ndash", "\u{2013}"),
    Entity::new("ne", "\u{2260}"),
    Entity::new("neArr", "\u{21D7}"),
    Entity::new("nearhk", "\u{2924}"),
    Entity::new("nearr", "\u{2197}"),
    Entity::new("nearrow", "\u{2197}"),
    Entity::new("nedot", "\u{2250}\u{338}"),
    Entity::new("nequiv", "\u{2262}"),
    Entity::new("nesear", "\u{2928}"),
    Entity::new("nesim", "\u{2242}\u{338}"),
    Entity::new("nexist", "\u{2204}"),
    Entity::new("nexists", "\u{2204}"),
    Entity::new("nfr", "\u{1D52B}"),
    Entity::new("ngE", "\u{2267}\u{338}"),
    Entity::new("nge", "\u{2271}"),
    Entity::new("ngeq", "\u{2271}"),
    Entity::new("ngeqq", "\u{2267}\u{338}"),
    Entity::new("ngeqslant", "\u{2A7E}\u{338}"),
    Entity::new("nges", "\u{2A7E}\u{338}"),
    Entity::new("ngsim", "\u{2275}"),
    Entity::new("ngt", "\u{226F}"),
    Entity::new("ngtr", "\u{226F}"),
    Entity::new("nhArr", "\u{21CE}"),
    Entity::new("nharr", "\u{21AE}"),
    Entity::new("nhpar", "\u{2AF2}"),
    Entity::new("ni", "\u{220B}"),
    Entity::new("nis", "\u{22FC}"),
    Entity::new("nisd", "\u{22FA}"),
    Entity::new("niv", "\u{220B}"),
    Entity::new("njcy", "\u{45A}"),
    Entity::new("nlArr", "\u{21CD}"),
    Entity::new("nlE", "\u{2266}\u{338}"),
    Entity::new("nlarr", "\u{219A}"),
    Entity::new("nldr", "\u{2025}"),
    Entity::new("nle", "\u{2270}"),
    Entity::new("nleftarrow", "\u{219A}"),
    Entity::new("nleftrightarrow", "\u{21AE}"),
    Entity::new("nleq", "\u{2270}"),
    Entity::new("nleqq", "\u{2266}\u{338}"),
    Entity::new("nleqslant", "\u{2A7D}\u{338}"),
    Entity::new("nles", "\u{2A7D}\u{338}"),
    Entity::new("nless", "\u{226E}"),
    Entity::new("nlsim", "\u{2274}"),
    Entity::new("nlt", "\u{226E}"),
    Entity::new("nltri", "\u{22EA}"),
    Entity::new("nltrie", "\u{22EC}"),
    Entity::new("nmid", "\u{2224}"),
    Entity::new("nopf", "\u{1D55F}"),
    Entity::new("not", "\u{AC}"),
    Entity::new("notin", "\u{2209}"),
    Entity::new("notinE", "\u{22F9}\u{338}"),
    Entity::new("notindot", "\u{22F5}\u{338}"),
    Entity::new("notinva", "\u{2209}"),
    Entity::new("notinvb", "\u{22F7}"),
    Entity::new("notinvc", "\u{22F6}"),
    Entity::new("notni", "\u{220C}"),
    Entity::new("notniva", "\u{220C}"),
    Entity::new("notnivb", "\u{22FE}"),
    Entity::new("notnivc", "\u{22FD}"),
    Entity::new("npar", "\u{2226}"),
    Entity::new("nparallel", "\u{2226}"),
    Entity::new("nparsl", "\u{2AFD}\u{20E5}"),
    Entity::new("npart", "\u{2202}\u{338}"),
    Entity::new("npolint", "\u{2A14}"),
    Entity::new("npr", "\u{2280}"),
    Entity::new("nprcue", "\u{22E0}"),
    Entity::new("npre", "\u{2AAF}\u{338}"),
    Entity::new("nprec", "\u{2280}"),
    Entity::new("npreceq", "\u{2AAF}\u{338}"),
    Entity::new("nrArr", "\u{21CF}"),
    Entity::new("nrarr", "\u{219B}"),
    Entity::new("nrarrc", "\u{2933}\u{338}"),
    Entity::new("nrarrw", "\u{219D}\u{338}"),
    Entity::new("nrightarrow", "\u{219B}"),
    Entity::new("nrtri", "\u{22EB}"),
    Entity::new("nrtrie", "\u{22ED}"),
    Entity::new("nsc", "\u{2281}"),
    Entity::new("nsccue", "\u{22E1}"),
    Entity::new("nsce", "\u{2AB0}\u{338}"),
    Entity::new("nscr", "\u{1D4C3}"),
    Entity::new("nshortmid", "\u{2224}"),
    Entity::new("nshortparallel", "\u{2226}"),
    Entity::new("nsim", "\u{2241}"),
    Entity::new("nsime", "\u{2244}"),
    Entity::new("nsimeq", "\u{2244}"),
    Entity::new("nsmid", "\u{2224}"),
    Entity::new("nspar", "\u{2226}"),
    Entity::new("nsqsube", "\u{22E2}"),
    Entity::new("nsqsupe", "\u{22E3}"),
    Entity::new("nsub", "\u{2284}"),
    Entity::new("nsubE", "\u{2AC5}\u{338}"),
    Entity::new("nsube", "\u{2288}"),
    Entity::new("nsubset", "\u{2282}\u{20D2}"),
    Entity::new("nsubseteq", "\u{2288}"),
    Entity::new("nsubseteqq", "\u{2AC5}\u{338}"),
    Entity::new("nsucc", "\u{2281}"),
    Entity::new("nsucceq", "\u{2AB0}\u{338}"),
    Entity::new("nsup", "\u{2285}"),
    Entity::new("nsupE", "\u{2AC6}\u{338}"),
    Entity::new("nsupe", "\u{2289}"),
    Entity::new("nsupset", "\u{2283}\u{20D2}"),
    Entity::new("nsupseteq", "\u{2289}"),
    Entity::new("nsupseteqq", "\u{2AC6}\u{338}"),
    Entity::new("ntgl", "\u{2279}"),
    Entity::new("ntilde", "\u{F1}"),
    Entity::new("ntlg", "\u{2278}"),
    Entity::new("ntriangleleft", "\u{22EA}"),
    Entity::new("ntrianglelefteq", "\u{22EC}"),
    Entity::new("ntriangleright", "\u{22EB}"),
    Entity::new("ntrianglerighteq", "\u{22ED}"),
    Entity::new("nu", "\u{3BD}"),
    Entity::new("num", "#"),
    Entity::new("numero", "\u{2116}"),
    Entity::new("numsp", "\u{2007}"),
    Entity::new("nvDash", "\u{22AD}"),
    Entity::new("nvHarr", "\u{2904}"),
    Entity::new("nvap", "\u{224D}\u{20D2}"),
    Entity::new("nvdash", "\u{22AC}"),
    Entity::new("nvge", "\u{2265}\u{20D2}"),
    Entity::new("nvgt", ">\u{20D2}"),
    Entity::new("nvinfin", "\u{29DE}"),
    Entity::new("nvlArr", "\u{2902}"),
    Entity::new("nvle", "\u{2264}\u{20D2}"),
    Entity::new("nvlt", "<\u{20D2}"),
    Entity::new("nvltrie", "\u{22B4}\u{20D2}"),
    Entity::new("nvrArr", "\u{2903}"),
    Entity::new("nvrtrie", "\u{22B5}\u{20D2}"),
    Entity::new("nvsim", "\u{223C}\u{20D2}"),
    Entity::new("nwArr", "\u{21D6}"),
    Entity::new("nwarhk", "\u{2923}"),
    Entity::new("nwarr", "\u{2196}"),
    Entity::new("nwarrow", "\u{2196}"),
    Entity::new("nwnear", "\u{2927}"),
    Entity::new("oS", "\u{24C8}"),
    Entity::new("oacute", "\u{F3}"),
    Entity::new("oast", "\u{229B}"),
    Entity::new("ocir", "\u{229A}"),
    Entity::new("ocirc", "\u{F4}"),
    Entity::new("ocy", "\u{43E}"),
    Entity::new("odash", "\u{229D}"),
    Entity::new("odblac", "\u{151}"),
    Entity::new("odiv", "\u{2A38}"),
    Entity::new("odot", "\u{2299}"),
    Entity::new("odsold", "\u{29BC}"),
    Entity::new("oelig", "\u{153}"),
    Entity::new("ofcir", "\u{29BF}"),
    Entity::new("ofr", "\u{1D52C}"),
    Entity::new("ogon", "\u{2DB}"),
    Entity::new("ograve", "\u{F2}"),
    Entity::new("ogt", "\u{29C1}"),
    Entity::new("ohbar", "\u{29B5}"),
    Entity::new("ohm", "\u{3A9}"),
    Entity::new("oint", "\u{222E}"),
    Entity::new("olarr", "\u{21BA}"),
    Entity::new("olcir", "\u{29BE}"),
    Entity::new("olcross", "\u{29BB}"),
    Entity::new("oline", "\u{203E}"),
    Entity::new("olt", "\u{29C0}"),
    Entity::new("omacr", "\u{14D}"),
    Entity::new("omega", "\u{3C9}"),
    Entity::new("omicron", "\u{3BF}"),
    Entity::new("omid", "\u{29B6}"),
    Entity::new("ominus", "\u{2296}"),
    Entity::new("oopf", "\u{1D560}"),
    Entity::new("opar", "\u{29B7}"),
    Entity::new("operp", "\u{29B9}"),
    Entity::new("oplus", "\u{2295}"),
    Entity::new("or", "\u{2228}"),
    Entity::new("orarr", "\u{21BB}"),
    Entity::new("ord", "\u{2A5D}"),
    Entity::new("order", "\u{2134}"),
    Entity::new("orderof", "\u{2134}"),
    Entity::new("ordf", "\u{AA}"),
    Entity::new("ordm", "\u{BA}"),
    Entity::new("origof", "\u{22B6}"),
    Entity::new("oror", "\u{2A56}"),
    Entity::new("orslope", "\u{2A57}"),
    Entity::new("orv", "\u{2A5B}"),
    Entity::new("oscr", "\u{2134}"),
    Entity::new("oslash", "\u{F8}"),
    Entity::new("osol", "\u{2298}"),
    Entity::new("otilde", "\u{F5}"),
    Entity::new("otimes", "\u{2297}"),
    Entity::new("otimesas", "\u{2A36}"),
    Entity::new("ouml", "\u{F6}"),
    Entity::new("ovbar", "\u{233D}"),
    Entity::new("par", "\u{2225}"),
    Entity::new("para", "\u{B6}"),
    Entity::new("parallel", "\u{2225}"),
    Entity::new("parsim", "\u{2AF3}"),
    Entity::new("parsl", "\u{2AFD}"),
    Entity::new("part", "\u{2202}"),
    Entity::new("pcy", "\u{43F}"),
    Entity::new("percnt", "%"),
    Entity::new("period", "."),
    Entity::new("permil", "\u{2030}"),
    Entity::new("perp", "\u{22A5}"),
    Entity::new("pertenk", "\u{2031}"),
    Entity::new("pfr", "\u{1D52D}"),
    Entity::new("phi", "\u{3C6}"),
    Entity::new("phiv", "\u{3D5}"),
    Entity::new("phmmat", "\u{2133}"),
    Entity::new("phone", "\u{260E}"),
    Entity::new("pi", "\u{3C0}"),
    Entity::new("pitchfork", "\u{22D4}"),
    Entity::new("piv", "\u{3D6}"),
    Entity::new("planck", "\u{210F}"),
    Entity::new("planckh", "\u{210E}"),
    Entity::new("plankv", "\u{210F}"),
    Entity::new("plus", "+"),
    Entity::new("plusacir", "\u{2A23}"),
    Entity::new("plusb", "\u{229E}"),
    Entity::new("pluscir", "\u{2A22}"),
    Entity::new("plusdo", "\u{2214}"),
    Entity::new("plusdu", "\u{2A25}"),
    Entity::new("pluse", "\u{2A72}"),
    Entity::new("plusmn", "\u{B1}"),
    Entity::new("plussim", "\u{2A26}"),
    Entity::new("plustwo", "\u{2A27}"),
    Entity::new("pm", "\u{B1}"),
    Entity::new("pointint", "\u{2A15}"),
    Entity::new("popf", "\u{1D561}"),
    Entity::new("pound", "\u{A3}"),
    Entity::new("pr", "\u{227A}"),
    Entity::new("prE", "\u{2AB3}"),
    Entity::new("prap", "\u{2AB7}"),
    Entity::new("prcue", "\u{227C}"),
    Entity::new("pre", "\u{2AAF}"),
    Entity::new("prec", "\u{227A}"),
    Entity::new("precapprox", "\u{2AB7}"),
    Entity::new("preccurlyeq", "\u{227C}"),
    Entity::new("preceq", "\u{2AAF}"),
    Entity::new("precnapprox", "\u{2AB9}"),
    Entity::new("precneqq", "\u{2AB5}"),
    Entity::new("precnsim", "\u{22E8}"),
    Entity::new("precsim", "\u{227E}"),
    Entity::new("prime", "\u{2032}"),
    Entity::new("primes", "\u{2119}"),
    Entity::new("prnE", "\u{2AB5}"),
    Entity::new("prnap", "\u{2AB9}"),
    Entity::new("prnsim", "\u{22E8}"),
    Entity::new("prod", "\u{220F}"),
    Entity::new("profalar", "\u{232E}"),
    Entity::new("profline", "\u{2312}"),
    Entity::new("profsurf", "\u{2313}"),
    Entity::new("prop", "\u{221D}"),
    Entity::new("propto", "\u{221D}"),
    Entity::new("prsim", "\u{227E}"),
    Entity::new("prurel", "\u{22B0}"),
    Entity::new("pscr", "\u{1D4C5}"),
    Entity::new("psi", "\u{3C8}"),
    Entity::new("puncsp", "\u{2008}"),
    Entity::new("qfr", "\u{1D52E}"),
    Entity::new("qint", "\u{2A0C}"),
    Entity::new("qopf", "\u{1D562}"),
    Entity::new("qprime", "\u{2057}"),
    Entity::new("qscr", "\u{1D4C6}"),
    Entity::new("quaternions", "\u{210D}"),
    Entity::new("quatint", "\u{2A16}"),
    Entity::new("quest", "?"),
    Entity::new("questeq", "\u{225F}"),
    Entity::new("quot", "\""),
    Entity::new("rAarr", "\u{21DB}"),
    Entity::new("rArr", "\u{21D2}"),
    Entity::new("rAtail", "\u{291C}"),
    Entity::new("rBarr", "\u{290F}"),
    Entity::new("rHar", "\u{2964}"),
    Entity::new("race", "\u{223D}\u{331}"),
    Entity::new("racute", "\u{155}"),
    Entity::new("radic", "\u{221A}"),
    Entity::new("raemptyv", "\u{29B3}"),
    Entity::new("rang", "\u{27E9}"),
    Entity::new("rangd", "\u{2992}"),
    Entity::new("range", "\u{29A5}"),
    Entity::new("rangle", "\u{27E9}"),
    Entity::new("raquo", "\u{BB}"),
    Entity::new("rarr", "\u{2192}"),
    Entity::new("rarrap", "\u{2975}"),
    Entity::new("rarrb", "\u{21E5}"),
    Entity::new("rarrbfs", "\u{2920}"),
    Entity::new("rarrc", "\u{2933}"),
    Entity::new("rarrfs", "\u{291E}"),
    Entity::new("rarrhk", "\u{21AA}"),
    Entity::new("rarrlp", "\u{21AC}"),
    Entity::new("rarrpl", "\u{2945}"),
    Entity::new("rarrsim", "\u{2974}"),
    Entity::new("rarrtl", "\u{21A3}"),
    Entity::new("rarrw", "\u{219D}"),
    Entity::new("ratail", "\u{291A}"),
    Entity::new("ratio", "\u{2236}"),
    Entity::new("rationals", "\u{211A}"),
    Entity::new("rbarr", "\u{290D}"),
    Entity::new("rbbrk", "\u{2773}"),
    Entity::new("rbrace", "}"),
    Entity::new("rbrack", "]"),
    Entity::new("rbrke", "\u{298C}"),
    Entity::new("rbrksld", "\u{298E}"),
    Entity::new("rbrkslu", "\u{2990}"),
    Entity::new("rcaron", "\u{159}"),
    Entity::new("rcedil", "\u{157}"),
    Entity::new("rceil", "\u{2309}"),
    Entity::new("rcub", "}"),
    Entity::new("rcy", "\u{440}"),
    Entity::new("rdca", "\u{2937}"),
    Entity::new("rdldhar", "\u{2969}"),
    Entity::new("rdquo", "\u{201D}"),
    Entity::new("rdquor", "\u{201D}"),
    Entity::new("rdsh", "\u{21B3}"),
    Entity::new("real", "\u{211C}"),
    Entity::new("realine", "\u{211B}"),
    Entity::new("realpart", "\u{211C}"),
    Entity::new("reals", "\u{211D}"),
    Entity::new("rect", "\u{25AD}"),
    Entity::new("reg", "\u{AE}"),
    Entity::new("rfisht", "\u{297D}"),
    Entity::new("rfloor", "\u{230B}"),
    Entity::new("rfr", "\u{1D52F}"),
    Entity::new("rhard", "\u{21C1}"),
    Entity::new("rharu", "\u{21C0}"),
    Entity::new("rharul", "\u{296C}"),
    Entity::new("rho", "\u{3C1}"),
    Entity::new("rhov", "\u{3F1}"),
    Entity::new("rightarrow", "\u{2192}"),
    Entity::new("rightarrowtail", "\u{21A3}"),
    Entity::new("rightharpoondown", "\u{21C1}"),
    Entity::new("rightharpoonup", "\u{21C0}"),
    Entity::new("rightleftarrows", "\u{21C4}"),
    Entity::new("rightleftharpoons", "\u{21CC}"),
    Entity::new("rightrightarrows", "\u{21C9}"),
    Entity::new("rightsquigarrow", "\u{219D}"),
    Entity::new("rightthreetimes", "\u{22CC}"),
    Entity::new("ring", "\u{2DA}"),
    Entity::new("risingdotseq", "\u{2253}"),
    Entity::new("rlarr", "\u{21C4}"),
    Entity::new("rlhar", "\u{21CC}"),
    Entity::new("rlm", "\u{200F}"),
    Entity::new("rmoust", "\u{23B1}"),
    Entity::new("rmoustache", "\u{23B1}"),
    Entity::new("rnmid", "\u{2AEE}"),
    Entity::new("roang", "\u{27ED}"),
    Entity::new("roarr", "\u{21FE}"),
    Entity::new("robrk", "\u{27E7}"),
    Entity::new("ropar", "\u{2986}"),
    Entity::new("ropf", "\u{1D563}"),
    Entity::new("roplus", "\u{2A2E}"),
    Entity::new("rotimes", "\u{2A35}"),
    Entity::new("rpar", ")"),
    Entity::new("rpargt", "\u{2994}"),
    Entity::new("rppolint", "\u{2A12}"),
    Entity::new("rrarr", "\u{21C9}"),
    Entity::new("rsaquo", "\u{203A}"),
    Entity::new("rscr", "\u{1D4C7}"),
    Entity::new("rsh", "\u{21B1}"),
    Entity::new("rsqb", "]"),
    Entity::new("rsquo", "\u{2019}"),
    Entity::new("rsquor", "\u{2019}"),
    Entity::new("rthree", "\u{22CC}"),
    Entity::new("rtimes", "\u{22CA}"),
    Entity::new("rtri", "\u{25B9}"),
    Entity::new("rtrie", "\u{22B5}"),
    Entity::new("rtrif", "\u{25B8}"),
    Entity::new("rtriltri", "\u{29CE}"),
    Entity::new("ruluhar", "\u{2968}"),
    Entity::new("rx", "\u{211E}"),
    Entity::new("sacute", "\u{15B}"),
    Entity::new("sbquo", "\u{201A}"),
    Entity::new("sc", "\u{227B}"),
    Entity::new("scE", "\u{2AB4}"),
    Entity::new("scap", "\u{2AB8}"),
    Entity::new("scaron", "\u{161}"),
    Entity::new("sccue", "\u{227D}"),
    Entity::new("sce", "\u{2AB0}"),
    Entity::new("scedil", "\u{15F}"),
    Entity::new("scirc", "\u{15D}"),
    Entity::new("scnE", "\u{2AB6}"),
    Entity::new("scnap", "\u{2ABA}"),
    Entity::new("scnsim", "\u{22E9}"),
    Entity::new("scpolint", "\u{2A13}"),
    Entity::new("scsim", "\u{227F}"),
    Entity::new("scy", "\u{441}"),
    Entity::new("sdot", "\u{22C5}"),
    Entity::new("sdotb", "\u{22A1}"),
    Entity::new("sdote", "\u{2A66}"),
    Entity::new("seArr", "\u{21D8}"),
    Entity::new("searhk", "\u{2925}"),
    Entity::new("searr", "\u{2198}"),
    Entity::new("searrow", "\u{2198}"),
    Entity::new("sect", "\u{A7}"),
    Entity::new("semi", ";"),
    Entity::new("seswar", "\u{2929}"),
    Entity::new("setminus", "\u{2216}"),
    Entity::new("setmn", "\u{2216}"),
    Entity::new("sext", "\u{2736}"),
    Entity::new("sfr", "\u{1D530}"),
    Entity::new("sfrown", "\u{2322}"),
    Entity::new("sharp", "\u{266F}"),
    Entity::new("shchcy", "\u{449}"),
    Entity::new("shcy", "\u{448}"),
    Entity::new("shortmid", "\u{2223}"),
    Entity::new("shortparallel", "\u{2225}"),
    Entity::new("shy", "\u{AD}"),
    Entity::new("sigma", "\u{3C3}"),
    Entity::new("sigmaf", "\u{3C2}"),
    Entity::new("sigmav", "\u{3C2}"),
    Entity::new("sim", "\u{223C}"),
    Entity::new("simdot", "\u{2A6A}"),
    Entity::new("sime", "\u{2243}"),
    Entity::new("simeq", "\u{2243}"),
    Entity::new("simg", "\u{2A9E}"),
    Entity::new("simgE", "\u{2AA0}"),
    Entity::new("siml", "\u{2A9D}"),
    Entity::new("simlE", "\u{2A9F}"),
    Entity::new("simne", "\u{2246}"),
    Entity::new("simplus", "\u{2A24}"),
    Entity::new("simrarr", "\u{2972}"),
    Entity::new("slarr", "\u{2190}"),
    Entity::new("smallsetminus", "\u{2216}"),
    Entity::new("smashp", "\u{2A33}"),
    Entity::new("smeparsl", "\u{29E4}"),
    Entity::new("smid", "\u{2223}"),
    Entity::new("smile", "\u{2323}"),
    Entity::new("smt", "\u{2AAA}"),
    Entity::new("smte", "\u{2AAC}"),
    Entity::new("smtes", "\u{2AAC}\u{FE00}"),
    Entity::new("softcy", "\u{44C}"),
    Entity::new("sol", "/"),
    Entity::new("solb", "\u{29C4}"),
    Entity::new("solbar", "\u{233F}"),
    Entity::new("sopf", "\u{1D564}"),
    Entity::new("spades", "\u{2660}"),
    Entity::new("spadesuit", "\u{2660}"),
    Entity::new("spar", "\u{2225}"),
    Entity::new("sqcap", "\u{2293}"),
    Entity::new("sqcaps", "\u{2293}\u{FE00}"),
    Entity::new("sqcup", "\u{2294}"),
    Entity::new("sqcups", "\u{2294}\u{FE00}"),
    Entity::new("sqsub", "\u{228F}"),
    Entity::new("sqsube", "\u{2291}"),
    Entity::new("sqsubset", "\u{228F}"),
    Entity::new("sqsubseteq", "\u{2291}"),
    Entity::new("sqsup", "\u{2290}"),
    Entity::new("sqsupe", "\u{2292}"),
    Entity::new("sqsupset", "\u{2290}"),
    Entity::new("sqsupseteq", "\u{2292}"),
    Entity::new("squ", "\u{25A1}"),
    Entity::new("square", "\u{25A1}"),
    Entity::new("squarf", "\u{25AA}"),
    Entity::new("squf", "\u{25AA}"),
    Entity::new("srarr", "\u{2192}"),
    Entity::new("sscr", "\u{1D4C8}"),
    Entity::new("ssetmn", "\u{2216}"),
    Entity::new("ssmile", "\u{2323}"),
    Entity::new("sstarf", "\u{22C6}"),
    Entity::new("star", "\u{2606}"),
    Entity::new("starf", "\u{2605}"),
    Entity::new("straightepsilon", "\u{3F5}"),
    Entity::new("straightphi", "\u{3D5}"),
    Entity::new("strns", "\u{AF}"),
    Entity::new("sub", "\u{2282}"),
    Entity::new("subE", "\u{2AC5}"),
    Entity::new("subdot", "\u{2ABD}"),
    Entity::new("sube", "\u{2286}"),
    Entity::new("subedot", "\u{2AC3}"),
    Entity::new("submult", "\u{2AC1}"),
    Entity::new("subnE", "\u{2ACB}"),
    Entity::new("subne", "\u{228A}"),
    Entity::new("subplus", "\u{2ABF}"),
    Entity::new("subrarr", "\u{2979}"),
    Entity::new("subset", "\u{2282}"),
    Entity::new("subseteq", "\u{2286}"),
    Entity::new("subseteqq", "\u{2AC5}"),
    Entity::new("subsetneq", "\u{228A}"),
    Entity::new("subsetneqq", "\u{2ACB}"),
    Entity::new("subsim", "\u{2AC7}"),
    Entity::new("subsub", "\u{2AD5}"),
    Entity::new("subsup", "\u{2AD3}"),
    Entity::new("succ", "\u{227B}"),
    Entity::new("succapprox", "\u{2AB8}"),
    Entity::new("succcurlyeq", "\u{227D}"),
    Entity::new("succeq", "\u{2AB0}"),
    Entity::new("succnapprox", "\u{2ABA}"),
    Entity::new("succneqq", "\u{2AB6}"),
    Entity::new("succnsim", "\u{22E9}"),
    Entity::new("succsim", "\u{227F}"),
    Entity::new("sum", "\u{2211}"),
    Entity::new("sung", "\u{266A}"),
    Entity::new("sup", "\u{2283}"),
    Entity::new("sup1", "\u{B9}"),
    Entity::new("sup2", "\u{B2}"),
    Entity::new("sup3", "\u{B3}"),
    Entity::new("supE", "\u{2AC6}"),
    Entity::new("supdot", "\u{2ABE}"),
    Entity::new("supdsub", "\u{2AD8}"),
    Entity::new("supe", "\u{2287}"),
    Entity::new("supedot", "\u{2AC4}"),
    Entity::new("suphsol", "\u{27C9}"),
    Entity::new("suphsub", "\u{2AD7}"),
    Entity::new("suplarr", "\u{297B}"),
    Entity::new("supmult", "\u{2AC2}"),
    Entity::new("supnE", "\u{2ACC}"),
    Entity::new("supne", "\u{228B}"),
    Entity::new("supplus", "\u{2AC0}"),
    Entity::new("supset", "\u{2283}"),
    Entity::new("supseteq", "\u{2287}"),
    Entity::new("supseteqq", "\u{2AC6}"),
    Entity::new("supsetneq", "\u{228B}"),
    Entity::new("supsetneqq", "\u{2ACC}"),
    Entity::new("supsim", "\u{2AC8}"),
    Entity::new("supsub", "\u{2AD4}"),
    Entity::new("supsup", "\u{2AD6}"),
    Entity::new("swArr", "\u{21D9}"),
    Entity::new("swarhk", "\u{2926}"),
    Entity::new("swarr", "\u{2199}"),
    Entity::new("swarrow", "\u{2199}"),
    Entity::new("swnwar", "\u{292A}"),
    Entity::new("szlig", "\u{DF}"),
    Entity::new("target", "\u{2316}"),
    Entity::new("tau", "\u{3C4}"),
    Entity::new("tbrk", "\u{23B4}"),
    Entity::new("tcaron", "\u{165}"),
    Entity::new("tcedil", "\u{163}"),
    Entity::new("tcy", "\u{442}"),
    Entity::new("tdot", "\u{20DB}"),
    Entity::new("telrec", "\u{2315}"),
    Entity::new("tfr", "\u{1D531}"),
    Entity::new("there4", "\u{2234}"),
    Entity::new("therefore", "\u{2234}"),
    Entity::new("theta", "\u{3B8}"),
    Entity::new("thetasym", "\u{3D1}"),
    Entity::new("thetav", "\u{3D1}"),
    Entity::new("thickapprox", "\u{2248}"),
    Entity::new("thicksim", "\u{223C}"),
    Entity::new("thinsp", "\u{2009}"),
    Entity::new("thkap", "\u{2248}"),
    Entity::new("thksim", "\u{223C}"),
    Entity::new("thorn", "\u{FE}"),
    Entity::new("tilde", "\u{2DC}"),
    Entity::new("times", "\u{D7}"),
    Entity::new("timesb", "\u{22A0}"),
    Entity::new("timesbar", "\u{2A31}"),
    Entity::new("timesd", "\u{2A30}"),
    Entity::new("tint", "\u{222D}"),
    Entity::new("toea", "\u{2928}"),
    Entity::new("top", "\u{22A4}"),
    Entity::new("topbot", "\u{2336}"),
    Entity::new("topcir", "\u{2AF1}"),
    Entity::new("topf", "\u{1D565}"),
    Entity::new("topfork", "\u{2ADA}"),
    Entity::new("tosa", "\u{2929}"),
    Entity::new("tprime", "\u{2034}"),
    Entity::new("trade", "\u{2122}"),
    Entity::new("triangle", "\u{25B5}"),
    Entity::new("triangledown", "\u{25BF}"),
    Entity::new("triangleleft", "\u{25C3}"),
    Entity::new("trianglelefteq", "\u{22B4}"),
    Entity::new("triangleq", "\u{225C}"),
    Entity::new("triangleright", "\u{25B9}"),
    Entity::new("trianglerighteq", "\u{22B5}"),
    Entity::new("tridot", "\u{25EC}"),
    Entity::new("trie", "\u{225C}"),
    Entity::new("triminus", "\u{2A3A}"),
    Entity::new("triplus", "\u{2A39}"),
    Entity::new("trisb", "\u{29CD}"),
    Entity::new("tritime", "\u{2A3B}"),
    Entity::new("trpezium", "\u{23E2}"),
    Entity::new("tscr", "\u{1D4C9}"),
    Entity::new("tscy", "\u{446}"),
    Entity::new("tshcy", "\u{45B}"),
    Entity::new("tstrok", "\u{167}"),
    Entity::new("twixt", "\u{226C}"),
    Entity::new("twoheadleftarrow", "\u{219E}"),
    Entity::new("twoheadrightarrow", "\u{21A0}"),
    Entity::new("uArr", "\u{21D1}"),
    Entity::new("uHar", "\u{2963}"),
    Entity::new("uacute", "\u{FA}"),
    Entity::new("uarr", "\u{2191}"),
    Entity::new("ubrcy", "\u{45E}"),
    Entity::new("ubreve", "\u{16D}"),
    Entity::new("ucirc", "\u{FB}"),
    Entity::new("ucy", "\u{443}"),
    Entity::new("udarr", "\u{21C5}"),
    Entity::new("udblac", "\u{171}"),
    Entity::new("udhar", "\u{296E}"),
    Entity::new("ufisht", "\u{297E}"),
    Entity::new("ufr", "\u{1D532}"),
    Entity::new("ugrave", "\u{F9}"),
    Entity::new("uharl", "\u{21BF}"),
    Entity::new("uharr", "\u{21BE}"),
    Entity::new("uhblk", "\u{2580}"),
    Entity::new("ulcorn", "\u{231C}"),
    Entity::new("ulcorner", "\u{231C}"),
    Entity::new("ulcrop", "\u{230F}"),
    Entity::new("ultri", "\u{25F8}"),
    Entity::new("umacr", "\u{16B}"),
    Entity::new("uml", "\u{A8}"),
    Entity::new("uogon", "\u{173}"),
    Entity::new("uopf", "\u{1D566}"),
    Entity::new("uparrow", "\u{2191}"),
    Entity::new("updownarrow", "\u{2195}"),
    Entity::new("upharpoonleft", "\u{21BF}"),
    Entity::new("upharpoonright", "\u{21BE}"),
    Entity::new("uplus", "\u{228E}"),
    Entity::new("upsi", "\u{3C5}"),
    Entity::new("upsih", "\u{3D2}"),
    Entity::new("upsilon", "\u{3C5}"),
    Entity::new("upuparrows", "\u{21C8}"),
    Entity::new("urcorn", "\u{231D}"),
    Entity::new("urcorner", "\u{231D}"),
    Entity::new("urcrop", "\u{230E}"),
    Entity::new("uring", "\u{16F}"),
    Entity::new("urtri", "\u{25F9}"),
    Entity::new("uscr", "\u{1D4CA}"),
    Entity::new("utdot", "\u{22F0}"),
    Entity::new("utilde", "\u{169}"),
    Entity::new("utri", "\u{25B5}"),
    Entity::new("utrif", "\u{25B4}"),
    Entity::new("uuarr", "\u{21C8}"),
    Entity::new("uuml", "\u{FC}"),
    Entity::new("uwangle", "\u{29A7}"),
    Entity::new("vArr", "\u{21D5}"),
    Entity::new("vBar", "\u{2AE8}"),
    Entity::new("vBarv", "\u{2AE9}"),
    Entity::new("vDash", "\u{22A8}"),
    Entity::new("vangrt", "\u{299C}"),
    Entity::new("varepsilon", "\u{3F5}"),
    Entity::new("varkappa", "\u{3F0}"),
    Entity::new("varnothing", "\u{2205}"),
    Entity::new("varphi", "\u{3D5}"),
    Entity::new("varpi", "\u{3D6}"),
    Entity::new("varpropto", "\u{221D}"),
    Entity::new("varr", "\u{2195}"),
    Entity::new("varrho", "\u{3F1}"),
    Entity::new("varsigma", "\u{3C2}"),
    Entity::new("varsubsetneq", "\u{228A}\u{FE00}"),
    Entity::new("varsubsetneqq", "\u{2ACB}\u{FE00}"),
    Entity::new("varsupsetneq", "\u{228B}\u{FE00}"),
    Entity::new("varsupsetneqq", "\u{2ACC}\u{FE00}"),
    Entity::new("vartheta", "\u{3D1}"),
    Entity::new("vartriangleleft", "\u{22B2}"),
    Entity::new("vartriangleright", "\u{22B3}"),
    Entity::new("vcy", "\u{432}"),
    Entity::new("vdash", "\u{22A2}"),
    Entity::new("vee", "\u{2228}"),
    Entity::new("veebar", "\u{22BB}"),
    Entity::new("veeeq", "\u{225A}"),
    Entity::new("vellip", "\u{22EE}"),
    Entity::new("verbar", "|"),
    Entity::new("vert", "|"),
    Entity::new("vfr", "\u{1D533}"),
    Entity::new("vltri", "\u{22B2}"),
    Entity::new("vnsub", "\u{2282}\u{20D2}"),
    Entity::new("vnsup", "\u{2283}\u{20D2}"),
    Entity::new("vopf", "\u{1D567}"),
    Entity::new("vprop", "\u{221D}"),
    Entity::new("vrtri", "\u{22B3}"),
    Entity::new("vscr", "\u{1D4CB}"),
    Entity::new("vsubnE", "\u{2ACB}\u{FE00}"),
    Entity::new("vsubne", "\u{228A}\u{FE00}"),
    Entity::new("vsupnE", "\u{2ACC}\u{FE00}"),
    Entity::new("vsupne", "\u{228B}\u{FE00}"),
    Entity::new("vzigzag", "\u{299A}"),
    Entity::new("wcirc", "\u{175}"),
    Entity::new("wedbar", "\u{2A5F}"),
    Entity::new("wedge", "\u{2227}"),
    Entity::new("wedgeq", "\u{2259}"),
    Entity::new("weierp", "\u{2118}"),
    Entity::new("wfr", "\u{1D534}"),
    Entity::new("wopf", "\u{1D568}"),
    Entity::new("wp", "\u{2118}"),
    Entity::new("wr", "\u{2240}"),
    Entity::new("wreath", "\u{2240}"),
    Entity::new("wscr", "\u{1D4CC}"),
    Entity::new("xcap", "\u{22C2}"),
    Entity::new("xcirc", "\u{25EF}"),
    Entity::new("xcup", "\u{22C3}"),
    Entity::new("xdtri", "\u{25BD}"),
    Entity::new("xfr", "\u{1D535}"),
    Entity::new("xhArr", "\u{27FA}"),
    Entity::new("xharr", "\u{27F7}"),
    Entity::new("xi", "\u{3BE}"),
    Entity::new("xlArr", "\u{27F8}"),
    Entity::new("xlarr", "\u{27F5}"),
    Entity::new("xmap", "\u{27FC}"),
    Entity::new("xnis", "\u{22FB}"),
    Entity::new("xodot", "\u{2A00}"),
    Entity::new("xopf", "\u{1D569}"),
    Entity::new("xoplus", "\u{2A01}"),
    Entity::new("xotime", "\u{2A02}"),
    Entity::new("xrArr", "\u{27F9}"),
    Entity::new("xrarr", "\u{27F6}"),
    Entity::new("xscr", "\u{1D4CD}"),
    Entity::new("xsqcup", "\u{2A06}"),
    Entity::new("xuplus", "\u{2A04}"),
    Entity::new("xutri", "\u{25B3}"),
    Entity::new("xvee", "\u{22C1}"),
    Entity::new("xwedge", "\u{22C0}"),
    Entity::new("yacute", "\u{FD}"),
    Entity::new("yacy", "\u{44F}"),
    Entity::new("ycirc", "\u{177}"),
    Entity::new("ycy", "\u{44B}"),
    Entity::new("yen", "\u{A5}"),
    Entity::new("yfr", "\u{1D536}"),
    Entity::new("yicy", "\u{457}"),
    Entity::new("yopf", "\u{1D56A}"),
    Entity::new("yscr", "\u{1D4CE}"),
    Entity::new("yucy", "\u{44E}"),
    Entity::new("yuml", "\u{FF}"),
    Entity::new("zacute", "\u{17A}"),
    Entity::new("zcaron", "\u{17E}"),
    Entity::new("zcy", "\u{437}"),
    Entity::new("zdot", "\u{17C}"),
    Entity::new("zeetrf", "\u{2128}"),
    Entity::new("zeta", "\u{3B6}"),
    Entity::new("zfr", "\u{1D537}"),
    Entity::new("zhcy", "\u{436}"),
    Entity::new("zigrarr", "\u{21DD}"),
    Entity::new("zopf", "\u{1D56B}"),
    Entity::new("zscr", "\u{1D4CF}"),
    Entity::new("zwj", "\u{200D}"),
    Entity::new("zwnj", "\u{200C}"),
];
