// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

use serde::{Deserialize, Serialize};

use crate::terminology::{CodeError, CodeSystem, Concept};

/// FHIR CodeSystem: SPDXLicense
/// Canonical URL: http://hl7.org/fhir/spdx-license
/// Version: 4.0.1
/// Title: SPDXLicense
/// Status: active
///
/// The license that applies to an Implementation Guide (using an SPDX license Identifiers, or 'not-open-source'). The binding is required but new SPDX license Identifiers are allowed to be used (https://spdx.org/licenses/).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize
)]
pub enum SPDXLicense {
    /// Display: Not open source
    /// Definition: Not an open source license.
    #[serde(rename = "not-open-source")]
    NotOpenSource,
    /// Display: BSD Zero Clause License
    /// Definition: BSD Zero Clause License.
    #[serde(rename = "0BSD")]
    N0bsd,
    /// Display: Attribution Assurance License
    /// Definition: Attribution Assurance License.
    #[serde(rename = "AAL")]
    Aal,
    /// Display: Abstyles License
    /// Definition: Abstyles License.
    #[serde(rename = "Abstyles")]
    Abstyles,
    /// Display: Adobe Systems Incorporated Source Code License Agreement
    /// Definition: Adobe Systems Incorporated Source Code License Agreement.
    #[serde(rename = "Adobe-2006")]
    Adobe2006,
    /// Display: Adobe Glyph List License
    /// Definition: Adobe Glyph List License.
    #[serde(rename = "Adobe-Glyph")]
    AdobeGlyph,
    /// Display: Amazon Digital Services License
    /// Definition: Amazon Digital Services License.
    #[serde(rename = "ADSL")]
    Adsl,
    /// Display: Academic Free License v1.1
    /// Definition: Academic Free License v1.1.
    #[serde(rename = "AFL-1.1")]
    Afl11,
    /// Display: Academic Free License v1.2
    /// Definition: Academic Free License v1.2.
    #[serde(rename = "AFL-1.2")]
    Afl12,
    /// Display: Academic Free License v2.0
    /// Definition: Academic Free License v2.0.
    #[serde(rename = "AFL-2.0")]
    Afl20,
    /// Display: Academic Free License v2.1
    /// Definition: Academic Free License v2.1.
    #[serde(rename = "AFL-2.1")]
    Afl21,
    /// Display: Academic Free License v3.0
    /// Definition: Academic Free License v3.0.
    #[serde(rename = "AFL-3.0")]
    Afl30,
    /// Display: Afmparse License
    /// Definition: Afmparse License.
    #[serde(rename = "Afmparse")]
    Afmparse,
    /// Display: Affero General Public License v1.0 only
    /// Definition: Affero General Public License v1.0 only.
    #[serde(rename = "AGPL-1.0-only")]
    Agpl10Only,
    /// Display: Affero General Public License v1.0 or later
    /// Definition: Affero General Public License v1.0 or later.
    #[serde(rename = "AGPL-1.0-or-later")]
    Agpl10OrLater,
    /// Display: GNU Affero General Public License v3.0 only
    /// Definition: GNU Affero General Public License v3.0 only.
    #[serde(rename = "AGPL-3.0-only")]
    Agpl30Only,
    /// Display: GNU Affero General Public License v3.0 or later
    /// Definition: GNU Affero General Public License v3.0 or later.
    #[serde(rename = "AGPL-3.0-or-later")]
    Agpl30OrLater,
    /// Display: Aladdin Free Public License
    /// Definition: Aladdin Free Public License.
    #[serde(rename = "Aladdin")]
    Aladdin,
    /// Display: AMD's plpa_map.c License
    /// Definition: AMD's plpa_map.c License.
    #[serde(rename = "AMDPLPA")]
    Amdplpa,
    /// Display: Apple MIT License
    /// Definition: Apple MIT License.
    #[serde(rename = "AML")]
    Aml,
    /// Display: Academy of Motion Picture Arts and Sciences BSD
    /// Definition: Academy of Motion Picture Arts and Sciences BSD.
    #[serde(rename = "AMPAS")]
    Ampas,
    /// Display: ANTLR Software Rights Notice
    /// Definition: ANTLR Software Rights Notice.
    #[serde(rename = "ANTLR-PD")]
    AntlrPd,
    /// Display: Apache License 1.0
    /// Definition: Apache License 1.0.
    #[serde(rename = "Apache-1.0")]
    Apache10,
    /// Display: Apache License 1.1
    /// Definition: Apache License 1.1.
    #[serde(rename = "Apache-1.1")]
    Apache11,
    /// Display: Apache License 2.0
    /// Definition: Apache License 2.0.
    #[serde(rename = "Apache-2.0")]
    Apache20,
    /// Display: Adobe Postscript AFM License
    /// Definition: Adobe Postscript AFM License.
    #[serde(rename = "APAFML")]
    Apafml,
    /// Display: Adaptive Public License 1.0
    /// Definition: Adaptive Public License 1.0.
    #[serde(rename = "APL-1.0")]
    Apl10,
    /// Display: Apple Public Source License 1.0
    /// Definition: Apple Public Source License 1.0.
    #[serde(rename = "APSL-1.0")]
    Apsl10,
    /// Display: Apple Public Source License 1.1
    /// Definition: Apple Public Source License 1.1.
    #[serde(rename = "APSL-1.1")]
    Apsl11,
    /// Display: Apple Public Source License 1.2
    /// Definition: Apple Public Source License 1.2.
    #[serde(rename = "APSL-1.2")]
    Apsl12,
    /// Display: Apple Public Source License 2.0
    /// Definition: Apple Public Source License 2.0.
    #[serde(rename = "APSL-2.0")]
    Apsl20,
    /// Display: Artistic License 1.0 w/clause 8
    /// Definition: Artistic License 1.0 w/clause 8.
    #[serde(rename = "Artistic-1.0-cl8")]
    Artistic10Cl8,
    /// Display: Artistic License 1.0 (Perl)
    /// Definition: Artistic License 1.0 (Perl).
    #[serde(rename = "Artistic-1.0-Perl")]
    Artistic10Perl,
    /// Display: Artistic License 1.0
    /// Definition: Artistic License 1.0.
    #[serde(rename = "Artistic-1.0")]
    Artistic10,
    /// Display: Artistic License 2.0
    /// Definition: Artistic License 2.0.
    #[serde(rename = "Artistic-2.0")]
    Artistic20,
    /// Display: Bahyph License
    /// Definition: Bahyph License.
    #[serde(rename = "Bahyph")]
    Bahyph,
    /// Display: Barr License
    /// Definition: Barr License.
    #[serde(rename = "Barr")]
    Barr,
    /// Display: Beerware License
    /// Definition: Beerware License.
    #[serde(rename = "Beerware")]
    Beerware,
    /// Display: BitTorrent Open Source License v1.0
    /// Definition: BitTorrent Open Source License v1.0.
    #[serde(rename = "BitTorrent-1.0")]
    Bittorrent10,
    /// Display: BitTorrent Open Source License v1.1
    /// Definition: BitTorrent Open Source License v1.1.
    #[serde(rename = "BitTorrent-1.1")]
    Bittorrent11,
    /// Display: Borceux license
    /// Definition: Borceux license.
    #[serde(rename = "Borceux")]
    Borceux,
    /// Display: BSD 1-Clause License
    /// Definition: BSD 1-Clause License.
    #[serde(rename = "BSD-1-Clause")]
    Bsd1Clause,
    /// Display: BSD 2-Clause FreeBSD License
    /// Definition: BSD 2-Clause FreeBSD License.
    #[serde(rename = "BSD-2-Clause-FreeBSD")]
    Bsd2ClauseFreebsd,
    /// Display: BSD 2-Clause NetBSD License
    /// Definition: BSD 2-Clause NetBSD License.
    #[serde(rename = "BSD-2-Clause-NetBSD")]
    Bsd2ClauseNetbsd,
    /// Display: BSD-2-Clause Plus Patent License
    /// Definition: BSD-2-Clause Plus Patent License.
    #[serde(rename = "BSD-2-Clause-Patent")]
    Bsd2ClausePatent,
    /// Display: BSD 2-Clause "Simplified" License
    /// Definition: BSD 2-Clause "Simplified" License.
    #[serde(rename = "BSD-2-Clause")]
    Bsd2Clause,
    /// Display: BSD with attribution
    /// Definition: BSD with attribution.
    #[serde(rename = "BSD-3-Clause-Attribution")]
    Bsd3ClauseAttribution,
    /// Display: BSD 3-Clause Clear License
    /// Definition: BSD 3-Clause Clear License.
    #[serde(rename = "BSD-3-Clause-Clear")]
    Bsd3ClauseClear,
    /// Display: Lawrence Berkeley National Labs BSD variant license
    /// Definition: Lawrence Berkeley National Labs BSD variant license.
    #[serde(rename = "BSD-3-Clause-LBNL")]
    Bsd3ClauseLbnl,
    /// Display: BSD 3-Clause No Nuclear License 2014
    /// Definition: BSD 3-Clause No Nuclear License 2014.
    #[serde(rename = "BSD-3-Clause-No-Nuclear-License-2014")]
    Bsd3ClauseNoNuclearLicense2014,
    /// Display: BSD 3-Clause No Nuclear License
    /// Definition: BSD 3-Clause No Nuclear License.
    #[serde(rename = "BSD-3-Clause-No-Nuclear-License")]
    Bsd3ClauseNoNuclearLicense,
    /// Display: BSD 3-Clause No Nuclear Warranty
    /// Definition: BSD 3-Clause No Nuclear Warranty.
    #[serde(rename = "BSD-3-Clause-No-Nuclear-Warranty")]
    Bsd3ClauseNoNuclearWarranty,
    /// Display: BSD 3-Clause "New" or "Revised" License
    /// Definition: BSD 3-Clause "New" or "Revised" License.
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    /// Display: BSD-4-Clause (University of California-Specific)
    /// Definition: BSD-4-Clause (University of California-Specific).
    #[serde(rename = "BSD-4-Clause-UC")]
    Bsd4ClauseUc,
    /// Display: BSD 4-Clause "Original" or "Old" License
    /// Definition: BSD 4-Clause "Original" or "Old" License.
    #[serde(rename = "BSD-4-Clause")]
    Bsd4Clause,
    /// Display: BSD Protection License
    /// Definition: BSD Protection License.
    #[serde(rename = "BSD-Protection")]
    BsdProtection,
    /// Display: BSD Source Code Attribution
    /// Definition: BSD Source Code Attribution.
    #[serde(rename = "BSD-Source-Code")]
    BsdSourceCode,
    /// Display: Boost Software License 1.0
    /// Definition: Boost Software License 1.0.
    #[serde(rename = "BSL-1.0")]
    Bsl10,
    /// Display: bzip2 and libbzip2 License v1.0.5
    /// Definition: bzip2 and libbzip2 License v1.0.5.
    #[serde(rename = "bzip2-1.0.5")]
    Bzip2105,
    /// Display: bzip2 and libbzip2 License v1.0.6
    /// Definition: bzip2 and libbzip2 License v1.0.6.
    #[serde(rename = "bzip2-1.0.6")]
    Bzip2106,
    /// Display: Caldera License
    /// Definition: Caldera License.
    #[serde(rename = "Caldera")]
    Caldera,
    /// Display: Computer Associates Trusted Open Source License 1.1
    /// Definition: Computer Associates Trusted Open Source License 1.1.
    #[serde(rename = "CATOSL-1.1")]
    Catosl11,
    /// Display: Creative Commons Attribution 1.0 Generic
    /// Definition: Creative Commons Attribution 1.0 Generic.
    #[serde(rename = "CC-BY-1.0")]
    CcBy10,
    /// Display: Creative Commons Attribution 2.0 Generic
    /// Definition: Creative Commons Attribution 2.0 Generic.
    #[serde(rename = "CC-BY-2.0")]
    CcBy20,
    /// Display: Creative Commons Attribution 2.5 Generic
    /// Definition: Creative Commons Attribution 2.5 Generic.
    #[serde(rename = "CC-BY-2.5")]
    CcBy25,
    /// Display: Creative Commons Attribution 3.0 Unported
    /// Definition: Creative Commons Attribution 3.0 Unported.
    #[serde(rename = "CC-BY-3.0")]
    CcBy30,
    /// Display: Creative Commons Attribution 4.0 International
    /// Definition: Creative Commons Attribution 4.0 International.
    #[serde(rename = "CC-BY-4.0")]
    CcBy40,
    /// Display: Creative Commons Attribution Non Commercial 1.0 Generic
    /// Definition: Creative Commons Attribution Non Commercial 1.0 Generic.
    #[serde(rename = "CC-BY-NC-1.0")]
    CcByNc10,
    /// Display: Creative Commons Attribution Non Commercial 2.0 Generic
    /// Definition: Creative Commons Attribution Non Commercial 2.0 Generic.
    #[serde(rename = "CC-BY-NC-2.0")]
    CcByNc20,
    /// Display: Creative Commons Attribution Non Commercial 2.5 Generic
    /// Definition: Creative Commons Attribution Non Commercial 2.5 Generic.
    #[serde(rename = "CC-BY-NC-2.5")]
    CcByNc25,
    /// Display: Creative Commons Attribution Non Commercial 3.0 Unported
    /// Definition: Creative Commons Attribution Non Commercial 3.0 Unported.
    #[serde(rename = "CC-BY-NC-3.0")]
    CcByNc30,
    /// Display: Creative Commons Attribution Non Commercial 4.0 International
    /// Definition: Creative Commons Attribution Non Commercial 4.0 International.
    #[serde(rename = "CC-BY-NC-4.0")]
    CcByNc40,
    /// Display: Creative Commons Attribution Non Commercial No Derivatives 1.0 Generic
    /// Definition: Creative Commons Attribution Non Commercial No Derivatives 1.0 Generic.
    #[serde(rename = "CC-BY-NC-ND-1.0")]
    CcByNcNd10,
    /// Display: Creative Commons Attribution Non Commercial No Derivatives 2.0 Generic
    /// Definition: Creative Commons Attribution Non Commercial No Derivatives 2.0 Generic.
    #[serde(rename = "CC-BY-NC-ND-2.0")]
    CcByNcNd20,
    /// Display: Creative Commons Attribution Non Commercial No Derivatives 2.5 Generic
    /// Definition: Creative Commons Attribution Non Commercial No Derivatives 2.5 Generic.
    #[serde(rename = "CC-BY-NC-ND-2.5")]
    CcByNcNd25,
    /// Display: Creative Commons Attribution Non Commercial No Derivatives 3.0 Unported
    /// Definition: Creative Commons Attribution Non Commercial No Derivatives 3.0 Unported.
    #[serde(rename = "CC-BY-NC-ND-3.0")]
    CcByNcNd30,
    /// Display: Creative Commons Attribution Non Commercial No Derivatives 4.0 International
    /// Definition: Creative Commons Attribution Non Commercial No Derivatives 4.0 International.
    #[serde(rename = "CC-BY-NC-ND-4.0")]
    CcByNcNd40,
    /// Display: Creative Commons Attribution Non Commercial Share Alike 1.0 Generic
    /// Definition: Creative Commons Attribution Non Commercial Share Alike 1.0 Generic.
    #[serde(rename = "CC-BY-NC-SA-1.0")]
    CcByNcSa10,
    /// Display: Creative Commons Attribution Non Commercial Share Alike 2.0 Generic
    /// Definition: Creative Commons Attribution Non Commercial Share Alike 2.0 Generic.
    #[serde(rename = "CC-BY-NC-SA-2.0")]
    CcByNcSa20,
    /// Display: Creative Commons Attribution Non Commercial Share Alike 2.5 Generic
    /// Definition: Creative Commons Attribution Non Commercial Share Alike 2.5 Generic.
    #[serde(rename = "CC-BY-NC-SA-2.5")]
    CcByNcSa25,
    /// Display: Creative Commons Attribution Non Commercial Share Alike 3.0 Unported
    /// Definition: Creative Commons Attribution Non Commercial Share Alike 3.0 Unported.
    #[serde(rename = "CC-BY-NC-SA-3.0")]
    CcByNcSa30,
    /// Display: Creative Commons Attribution Non Commercial Share Alike 4.0 International
    /// Definition: Creative Commons Attribution Non Commercial Share Alike 4.0 International.
    #[serde(rename = "CC-BY-NC-SA-4.0")]
    CcByNcSa40,
    /// Display: Creative Commons Attribution No Derivatives 1.0 Generic
    /// Definition: Creative Commons Attribution No Derivatives 1.0 Generic.
    #[serde(rename = "CC-BY-ND-1.0")]
    CcByNd10,
    /// Display: Creative Commons Attribution No Derivatives 2.0 Generic
    /// Definition: Creative Commons Attribution No Derivatives 2.0 Generic.
    #[serde(rename = "CC-BY-ND-2.0")]
    CcByNd20,
    /// Display: Creative Commons Attribution No Derivatives 2.5 Generic
    /// Definition: Creative Commons Attribution No Derivatives 2.5 Generic.
    #[serde(rename = "CC-BY-ND-2.5")]
    CcByNd25,
    /// Display: Creative Commons Attribution No Derivatives 3.0 Unported
    /// Definition: Creative Commons Attribution No Derivatives 3.0 Unported.
    #[serde(rename = "CC-BY-ND-3.0")]
    CcByNd30,
    /// Display: Creative Commons Attribution No Derivatives 4.0 International
    /// Definition: Creative Commons Attribution No Derivatives 4.0 International.
    #[serde(rename = "CC-BY-ND-4.0")]
    CcByNd40,
    /// Display: Creative Commons Attribution Share Alike 1.0 Generic
    /// Definition: Creative Commons Attribution Share Alike 1.0 Generic.
    #[serde(rename = "CC-BY-SA-1.0")]
    CcBySa10,
    /// Display: Creative Commons Attribution Share Alike 2.0 Generic
    /// Definition: Creative Commons Attribution Share Alike 2.0 Generic.
    #[serde(rename = "CC-BY-SA-2.0")]
    CcBySa20,
    /// Display: Creative Commons Attribution Share Alike 2.5 Generic
    /// Definition: Creative Commons Attribution Share Alike 2.5 Generic.
    #[serde(rename = "CC-BY-SA-2.5")]
    CcBySa25,
    /// Display: Creative Commons Attribution Share Alike 3.0 Unported
    /// Definition: Creative Commons Attribution Share Alike 3.0 Unported.
    #[serde(rename = "CC-BY-SA-3.0")]
    CcBySa30,
    /// Display: Creative Commons Attribution Share Alike 4.0 International
    /// Definition: Creative Commons Attribution Share Alike 4.0 International.
    #[serde(rename = "CC-BY-SA-4.0")]
    CcBySa40,
    /// Display: Creative Commons Zero v1.0 Universal
    /// Definition: Creative Commons Zero v1.0 Universal.
    #[serde(rename = "CC0-1.0")]
    Cc010,
    /// Display: Common Development and Distribution License 1.0
    /// Definition: Common Development and Distribution License 1.0.
    #[serde(rename = "CDDL-1.0")]
    Cddl10,
    /// Display: Common Development and Distribution License 1.1
    /// Definition: Common Development and Distribution License 1.1.
    #[serde(rename = "CDDL-1.1")]
    Cddl11,
    /// Display: Community Data License Agreement Permissive 1.0
    /// Definition: Community Data License Agreement Permissive 1.0.
    #[serde(rename = "CDLA-Permissive-1.0")]
    CdlaPermissive10,
    /// Display: Community Data License Agreement Sharing 1.0
    /// Definition: Community Data License Agreement Sharing 1.0.
    #[serde(rename = "CDLA-Sharing-1.0")]
    CdlaSharing10,
    /// Display: CeCILL Free Software License Agreement v1.0
    /// Definition: CeCILL Free Software License Agreement v1.0.
    #[serde(rename = "CECILL-1.0")]
    Cecill10,
    /// Display: CeCILL Free Software License Agreement v1.1
    /// Definition: CeCILL Free Software License Agreement v1.1.
    #[serde(rename = "CECILL-1.1")]
    Cecill11,
    /// Display: CeCILL Free Software License Agreement v2.0
    /// Definition: CeCILL Free Software License Agreement v2.0.
    #[serde(rename = "CECILL-2.0")]
    Cecill20,
    /// Display: CeCILL Free Software License Agreement v2.1
    /// Definition: CeCILL Free Software License Agreement v2.1.
    #[serde(rename = "CECILL-2.1")]
    Cecill21,
    /// Display: CeCILL-B Free Software License Agreement
    /// Definition: CeCILL-B Free Software License Agreement.
    #[serde(rename = "CECILL-B")]
    CecillB,
    /// Display: CeCILL-C Free Software License Agreement
    /// Definition: CeCILL-C Free Software License Agreement.
    #[serde(rename = "CECILL-C")]
    CecillC,
    /// Display: Clarified Artistic License
    /// Definition: Clarified Artistic License.
    #[serde(rename = "ClArtistic")]
    Clartistic,
    /// Display: CNRI Jython License
    /// Definition: CNRI Jython License.
    #[serde(rename = "CNRI-Jython")]
    CnriJython,
    /// Display: CNRI Python Open Source GPL Compatible License Agreement
    /// Definition: CNRI Python Open Source GPL Compatible License Agreement.
    #[serde(rename = "CNRI-Python-GPL-Compatible")]
    CnriPythonGplCompatible,
    /// Display: CNRI Python License
    /// Definition: CNRI Python License.
    #[serde(rename = "CNRI-Python")]
    CnriPython,
    /// Display: Condor Public License v1.1
    /// Definition: Condor Public License v1.1.
    #[serde(rename = "Condor-1.1")]
    Condor11,
    /// Display: Common Public Attribution License 1.0
    /// Definition: Common Public Attribution License 1.0.
    #[serde(rename = "CPAL-1.0")]
    Cpal10,
    /// Display: Common Public License 1.0
    /// Definition: Common Public License 1.0.
    #[serde(rename = "CPL-1.0")]
    Cpl10,
    /// Display: Code Project Open License 1.02
    /// Definition: Code Project Open License 1.02.
    #[serde(rename = "CPOL-1.02")]
    Cpol102,
    /// Display: Crossword License
    /// Definition: Crossword License.
    #[serde(rename = "Crossword")]
    Crossword,
    /// Display: CrystalStacker License
    /// Definition: CrystalStacker License.
    #[serde(rename = "CrystalStacker")]
    Crystalstacker,
    /// Display: CUA Office Public License v1.0
    /// Definition: CUA Office Public License v1.0.
    #[serde(rename = "CUA-OPL-1.0")]
    CuaOpl10,
    /// Display: Cube License
    /// Definition: Cube License.
    #[serde(rename = "Cube")]
    Cube,
    /// Display: curl License
    /// Definition: curl License.
    #[serde(rename = "curl")]
    Curl,
    /// Display: Deutsche Freie Software Lizenz
    /// Definition: Deutsche Freie Software Lizenz.
    #[serde(rename = "D-FSL-1.0")]
    DFsl10,
    /// Display: diffmark license
    /// Definition: diffmark license.
    #[serde(rename = "diffmark")]
    Diffmark,
    /// Display: DOC License
    /// Definition: DOC License.
    #[serde(rename = "DOC")]
    Doc,
    /// Display: Dotseqn License
    /// Definition: Dotseqn License.
    #[serde(rename = "Dotseqn")]
    Dotseqn,
    /// Display: DSDP License
    /// Definition: DSDP License.
    #[serde(rename = "DSDP")]
    Dsdp,
    /// Display: dvipdfm License
    /// Definition: dvipdfm License.
    #[serde(rename = "dvipdfm")]
    Dvipdfm,
    /// Display: Educational Community License v1.0
    /// Definition: Educational Community License v1.0.
    #[serde(rename = "ECL-1.0")]
    Ecl10,
    /// Display: Educational Community License v2.0
    /// Definition: Educational Community License v2.0.
    #[serde(rename = "ECL-2.0")]
    Ecl20,
    /// Display: Eiffel Forum License v1.0
    /// Definition: Eiffel Forum License v1.0.
    #[serde(rename = "EFL-1.0")]
    Efl10,
    /// Display: Eiffel Forum License v2.0
    /// Definition: Eiffel Forum License v2.0.
    #[serde(rename = "EFL-2.0")]
    Efl20,
    /// Display: eGenix.com Public License 1.1.0
    /// Definition: eGenix.com Public License 1.1.0.
    #[serde(rename = "eGenix")]
    Egenix,
    /// Display: Entessa Public License v1.0
    /// Definition: Entessa Public License v1.0.
    #[serde(rename = "Entessa")]
    Entessa,
    /// Display: Eclipse Public License 1.0
    /// Definition: Eclipse Public License 1.0.
    #[serde(rename = "EPL-1.0")]
    Epl10,
    /// Display: Eclipse Public License 2.0
    /// Definition: Eclipse Public License 2.0.
    #[serde(rename = "EPL-2.0")]
    Epl20,
    /// Display: Erlang Public License v1.1
    /// Definition: Erlang Public License v1.1.
    #[serde(rename = "ErlPL-1.1")]
    Erlpl11,
    /// Display: EU DataGrid Software License
    /// Definition: EU DataGrid Software License.
    #[serde(rename = "EUDatagrid")]
    Eudatagrid,
    /// Display: European Union Public License 1.0
    /// Definition: European Union Public License 1.0.
    #[serde(rename = "EUPL-1.0")]
    Eupl10,
    /// Display: European Union Public License 1.1
    /// Definition: European Union Public License 1.1.
    #[serde(rename = "EUPL-1.1")]
    Eupl11,
    /// Display: European Union Public License 1.2
    /// Definition: European Union Public License 1.2.
    #[serde(rename = "EUPL-1.2")]
    Eupl12,
    /// Display: Eurosym License
    /// Definition: Eurosym License.
    #[serde(rename = "Eurosym")]
    Eurosym,
    /// Display: Fair License
    /// Definition: Fair License.
    #[serde(rename = "Fair")]
    Fair,
    /// Display: Frameworx Open License 1.0
    /// Definition: Frameworx Open License 1.0.
    #[serde(rename = "Frameworx-1.0")]
    Frameworx10,
    /// Display: FreeImage Public License v1.0
    /// Definition: FreeImage Public License v1.0.
    #[serde(rename = "FreeImage")]
    Freeimage,
    /// Display: FSF All Permissive License
    /// Definition: FSF All Permissive License.
    #[serde(rename = "FSFAP")]
    Fsfap,
    /// Display: FSF Unlimited License
    /// Definition: FSF Unlimited License.
    #[serde(rename = "FSFUL")]
    Fsful,
    /// Display: FSF Unlimited License (with License Retention)
    /// Definition: FSF Unlimited License (with License Retention).
    #[serde(rename = "FSFULLR")]
    Fsfullr,
    /// Display: Freetype Project License
    /// Definition: Freetype Project License.
    #[serde(rename = "FTL")]
    Ftl,
    /// Display: GNU Free Documentation License v1.1 only
    /// Definition: GNU Free Documentation License v1.1 only.
    #[serde(rename = "GFDL-1.1-only")]
    Gfdl11Only,
    /// Display: GNU Free Documentation License v1.1 or later
    /// Definition: GNU Free Documentation License v1.1 or later.
    #[serde(rename = "GFDL-1.1-or-later")]
    Gfdl11OrLater,
    /// Display: GNU Free Documentation License v1.2 only
    /// Definition: GNU Free Documentation License v1.2 only.
    #[serde(rename = "GFDL-1.2-only")]
    Gfdl12Only,
    /// Display: GNU Free Documentation License v1.2 or later
    /// Definition: GNU Free Documentation License v1.2 or later.
    #[serde(rename = "GFDL-1.2-or-later")]
    Gfdl12OrLater,
    /// Display: GNU Free Documentation License v1.3 only
    /// Definition: GNU Free Documentation License v1.3 only.
    #[serde(rename = "GFDL-1.3-only")]
    Gfdl13Only,
    /// Display: GNU Free Documentation License v1.3 or later
    /// Definition: GNU Free Documentation License v1.3 or later.
    #[serde(rename = "GFDL-1.3-or-later")]
    Gfdl13OrLater,
    /// Display: Giftware License
    /// Definition: Giftware License.
    #[serde(rename = "Giftware")]
    Giftware,
    /// Display: GL2PS License
    /// Definition: GL2PS License.
    #[serde(rename = "GL2PS")]
    Gl2ps,
    /// Display: 3dfx Glide License
    /// Definition: 3dfx Glide License.
    #[serde(rename = "Glide")]
    Glide,
    /// Display: Glulxe License
    /// Definition: Glulxe License.
    #[serde(rename = "Glulxe")]
    Glulxe,
    /// Display: gnuplot License
    /// Definition: gnuplot License.
    #[serde(rename = "gnuplot")]
    Gnuplot,
    /// Display: GNU General Public License v1.0 only
    /// Definition: GNU General Public License v1.0 only.
    #[serde(rename = "GPL-1.0-only")]
    Gpl10Only,
    /// Display: GNU General Public License v1.0 or later
    /// Definition: GNU General Public License v1.0 or later.
    #[serde(rename = "GPL-1.0-or-later")]
    Gpl10OrLater,
    /// Display: GNU General Public License v2.0 only
    /// Definition: GNU General Public License v2.0 only.
    #[serde(rename = "GPL-2.0-only")]
    Gpl20Only,
    /// Display: GNU General Public License v2.0 or later
    /// Definition: GNU General Public License v2.0 or later.
    #[serde(rename = "GPL-2.0-or-later")]
    Gpl20OrLater,
    /// Display: GNU General Public License v3.0 only
    /// Definition: GNU General Public License v3.0 only.
    #[serde(rename = "GPL-3.0-only")]
    Gpl30Only,
    /// Display: GNU General Public License v3.0 or later
    /// Definition: GNU General Public License v3.0 or later.
    #[serde(rename = "GPL-3.0-or-later")]
    Gpl30OrLater,
    /// Display: gSOAP Public License v1.3b
    /// Definition: gSOAP Public License v1.3b.
    #[serde(rename = "gSOAP-1.3b")]
    Gsoap13b,
    /// Display: Haskell Language Report License
    /// Definition: Haskell Language Report License.
    #[serde(rename = "HaskellReport")]
    Haskellreport,
    /// Display: Historical Permission Notice and Disclaimer
    /// Definition: Historical Permission Notice and Disclaimer.
    #[serde(rename = "HPND")]
    Hpnd,
    /// Display: IBM PowerPC Initialization and Boot Software
    /// Definition: IBM PowerPC Initialization and Boot Software.
    #[serde(rename = "IBM-pibs")]
    IbmPibs,
    /// Display: ICU License
    /// Definition: ICU License.
    #[serde(rename = "ICU")]
    Icu,
    /// Display: Independent JPEG Group License
    /// Definition: Independent JPEG Group License.
    #[serde(rename = "IJG")]
    Ijg,
    /// Display: ImageMagick License
    /// Definition: ImageMagick License.
    #[serde(rename = "ImageMagick")]
    Imagemagick,
    /// Display: iMatix Standard Function Library Agreement
    /// Definition: iMatix Standard Function Library Agreement.
    #[serde(rename = "iMatix")]
    Imatix,
    /// Display: Imlib2 License
    /// Definition: Imlib2 License.
    #[serde(rename = "Imlib2")]
    Imlib2,
    /// Display: Info-ZIP License
    /// Definition: Info-ZIP License.
    #[serde(rename = "Info-ZIP")]
    InfoZip,
    /// Display: Intel ACPI Software License Agreement
    /// Definition: Intel ACPI Software License Agreement.
    #[serde(rename = "Intel-ACPI")]
    IntelAcpi,
    /// Display: Intel Open Source License
    /// Definition: Intel Open Source License.
    #[serde(rename = "Intel")]
    Intel,
    /// Display: Interbase Public License v1.0
    /// Definition: Interbase Public License v1.0.
    #[serde(rename = "Interbase-1.0")]
    Interbase10,
    /// Display: IPA Font License
    /// Definition: IPA Font License.
    #[serde(rename = "IPA")]
    Ipa,
    /// Display: IBM Public License v1.0
    /// Definition: IBM Public License v1.0.
    #[serde(rename = "IPL-1.0")]
    Ipl10,
    /// Display: ISC License
    /// Definition: ISC License.
    #[serde(rename = "ISC")]
    Isc,
    /// Display: JasPer License
    /// Definition: JasPer License.
    #[serde(rename = "JasPer-2.0")]
    Jasper20,
    /// Display: JSON License
    /// Definition: JSON License.
    #[serde(rename = "JSON")]
    Json,
    /// Display: Licence Art Libre 1.2
    /// Definition: Licence Art Libre 1.2.
    #[serde(rename = "LAL-1.2")]
    Lal12,
    /// Display: Licence Art Libre 1.3
    /// Definition: Licence Art Libre 1.3.
    #[serde(rename = "LAL-1.3")]
    Lal13,
    /// Display: Latex2e License
    /// Definition: Latex2e License.
    #[serde(rename = "Latex2e")]
    Latex2e,
    /// Display: Leptonica License
    /// Definition: Leptonica License.
    #[serde(rename = "Leptonica")]
    Leptonica,
    /// Display: GNU Library General Public License v2 only
    /// Definition: GNU Library General Public License v2 only.
    #[serde(rename = "LGPL-2.0-only")]
    Lgpl20Only,
    /// Display: GNU Library General Public License v2 or later
    /// Definition: GNU Library General Public License v2 or later.
    #[serde(rename = "LGPL-2.0-or-later")]
    Lgpl20OrLater,
    /// Display: GNU Lesser General Public License v2.1 only
    /// Definition: GNU Lesser General Public License v2.1 only.
    #[serde(rename = "LGPL-2.1-only")]
    Lgpl21Only,
    /// Display: GNU Lesser General Public License v2.1 or later
    /// Definition: GNU Lesser General Public License v2.1 or later.
    #[serde(rename = "LGPL-2.1-or-later")]
    Lgpl21OrLater,
    /// Display: GNU Lesser General Public License v3.0 only
    /// Definition: GNU Lesser General Public License v3.0 only.
    #[serde(rename = "LGPL-3.0-only")]
    Lgpl30Only,
    /// Display: GNU Lesser General Public License v3.0 or later
    /// Definition: GNU Lesser General Public License v3.0 or later.
    #[serde(rename = "LGPL-3.0-or-later")]
    Lgpl30OrLater,
    /// Display: Lesser General Public License For Linguistic Resources
    /// Definition: Lesser General Public License For Linguistic Resources.
    #[serde(rename = "LGPLLR")]
    Lgpllr,
    /// Display: libpng License
    /// Definition: libpng License.
    #[serde(rename = "Libpng")]
    Libpng,
    /// Display: libtiff License
    /// Definition: libtiff License.
    #[serde(rename = "libtiff")]
    Libtiff,
    /// Display: Licence Libre du Québec – Permissive version 1.1
    /// Definition: Licence Libre du Québec – Permissive version 1.1.
    #[serde(rename = "LiLiQ-P-1.1")]
    LiliqP11,
    /// Display: Licence Libre du Québec – Réciprocité version 1.1
    /// Definition: Licence Libre du Québec – Réciprocité version 1.1.
    #[serde(rename = "LiLiQ-R-1.1")]
    LiliqR11,
    /// Display: Licence Libre du Québec – Réciprocité forte version 1.1
    /// Definition: Licence Libre du Québec – Réciprocité forte version 1.1.
    #[serde(rename = "LiLiQ-Rplus-1.1")]
    LiliqRplus11,
    /// Display: Linux Kernel Variant of OpenIB.org license
    /// Definition: Linux Kernel Variant of OpenIB.org license.
    #[serde(rename = "Linux-OpenIB")]
    LinuxOpenib,
    /// Display: Lucent Public License Version 1.0
    /// Definition: Lucent Public License Version 1.0.
    #[serde(rename = "LPL-1.0")]
    Lpl10,
    /// Display: Lucent Public License v1.02
    /// Definition: Lucent Public License v1.02.
    #[serde(rename = "LPL-1.02")]
    Lpl102,
    /// Display: LaTeX Project Public License v1.0
    /// Definition: LaTeX Project Public License v1.0.
    #[serde(rename = "LPPL-1.0")]
    Lppl10,
    /// Display: LaTeX Project Public License v1.1
    /// Definition: LaTeX Project Public License v1.1.
    #[serde(rename = "LPPL-1.1")]
    Lppl11,
    /// Display: LaTeX Project Public License v1.2
    /// Definition: LaTeX Project Public License v1.2.
    #[serde(rename = "LPPL-1.2")]
    Lppl12,
    /// Display: LaTeX Project Public License v1.3a
    /// Definition: LaTeX Project Public License v1.3a.
    #[serde(rename = "LPPL-1.3a")]
    Lppl13a,
    /// Display: LaTeX Project Public License v1.3c
    /// Definition: LaTeX Project Public License v1.3c.
    #[serde(rename = "LPPL-1.3c")]
    Lppl13c,
    /// Display: MakeIndex License
    /// Definition: MakeIndex License.
    #[serde(rename = "MakeIndex")]
    Makeindex,
    /// Display: MirOS License
    /// Definition: MirOS License.
    #[serde(rename = "MirOS")]
    Miros,
    /// Display: MIT No Attribution
    /// Definition: MIT No Attribution.
    #[serde(rename = "MIT-0")]
    Mit0,
    /// Display: Enlightenment License (e16)
    /// Definition: Enlightenment License (e16).
    #[serde(rename = "MIT-advertising")]
    MitAdvertising,
    /// Display: CMU License
    /// Definition: CMU License.
    #[serde(rename = "MIT-CMU")]
    MitCmu,
    /// Display: enna License
    /// Definition: enna License.
    #[serde(rename = "MIT-enna")]
    MitEnna,
    /// Display: feh License
    /// Definition: feh License.
    #[serde(rename = "MIT-feh")]
    MitFeh,
    /// Display: MIT License
    /// Definition: MIT License.
    #[serde(rename = "MIT")]
    Mit,
    /// Display: MIT +no-false-attribs license
    /// Definition: MIT +no-false-attribs license.
    #[serde(rename = "MITNFA")]
    Mitnfa,
    /// Display: Motosoto License
    /// Definition: Motosoto License.
    #[serde(rename = "Motosoto")]
    Motosoto,
    /// Display: mpich2 License
    /// Definition: mpich2 License.
    #[serde(rename = "mpich2")]
    Mpich2,
    /// Display: Mozilla Public License 1.0
    /// Definition: Mozilla Public License 1.0.
    #[serde(rename = "MPL-1.0")]
    Mpl10,
    /// Display: Mozilla Public License 1.1
    /// Definition: Mozilla Public License 1.1.
    #[serde(rename = "MPL-1.1")]
    Mpl11,
    /// Display: Mozilla Public License 2.0 (no copyleft exception)
    /// Definition: Mozilla Public License 2.0 (no copyleft exception).
    #[serde(rename = "MPL-2.0-no-copyleft-exception")]
    Mpl20NoCopyleftException,
    /// Display: Mozilla Public License 2.0
    /// Definition: Mozilla Public License 2.0.
    #[serde(rename = "MPL-2.0")]
    Mpl20,
    /// Display: Microsoft Public License
    /// Definition: Microsoft Public License.
    #[serde(rename = "MS-PL")]
    MsPl,
    /// Display: Microsoft Reciprocal License
    /// Definition: Microsoft Reciprocal License.
    #[serde(rename = "MS-RL")]
    MsRl,
    /// Display: Matrix Template Library License
    /// Definition: Matrix Template Library License.
    #[serde(rename = "MTLL")]
    Mtll,
    /// Display: Multics License
    /// Definition: Multics License.
    #[serde(rename = "Multics")]
    Multics,
    /// Display: Mup License
    /// Definition: Mup License.
    #[serde(rename = "Mup")]
    Mup,
    /// Display: NASA Open Source Agreement 1.3
    /// Definition: NASA Open Source Agreement 1.3.
    #[serde(rename = "NASA-1.3")]
    Nasa13,
    /// Display: Naumen Public License
    /// Definition: Naumen Public License.
    #[serde(rename = "Naumen")]
    Naumen,
    /// Display: Net Boolean Public License v1
    /// Definition: Net Boolean Public License v1.
    #[serde(rename = "NBPL-1.0")]
    Nbpl10,
    /// Display: University of Illinois/NCSA Open Source License
    /// Definition: University of Illinois/NCSA Open Source License.
    #[serde(rename = "NCSA")]
    Ncsa,
    /// Display: Net-SNMP License
    /// Definition: Net-SNMP License.
    #[serde(rename = "Net-SNMP")]
    NetSnmp,
    /// Display: NetCDF license
    /// Definition: NetCDF license.
    #[serde(rename = "NetCDF")]
    Netcdf,
    /// Display: Newsletr License
    /// Definition: Newsletr License.
    #[serde(rename = "Newsletr")]
    Newsletr,
    /// Display: Nethack General Public License
    /// Definition: Nethack General Public License.
    #[serde(rename = "NGPL")]
    Ngpl,
    /// Display: Norwegian Licence for Open Government Data
    /// Definition: Norwegian Licence for Open Government Data.
    #[serde(rename = "NLOD-1.0")]
    Nlod10,
    /// Display: No Limit Public License
    /// Definition: No Limit Public License.
    #[serde(rename = "NLPL")]
    Nlpl,
    /// Display: Nokia Open Source License
    /// Definition: Nokia Open Source License.
    #[serde(rename = "Nokia")]
    Nokia,
    /// Display: Netizen Open Source License
    /// Definition: Netizen Open Source License.
    #[serde(rename = "NOSL")]
    Nosl,
    /// Display: Noweb License
    /// Definition: Noweb License.
    #[serde(rename = "Noweb")]
    Noweb,
    /// Display: Netscape Public License v1.0
    /// Definition: Netscape Public License v1.0.
    #[serde(rename = "NPL-1.0")]
    Npl10,
    /// Display: Netscape Public License v1.1
    /// Definition: Netscape Public License v1.1.
    #[serde(rename = "NPL-1.1")]
    Npl11,
    /// Display: Non-Profit Open Software License 3.0
    /// Definition: Non-Profit Open Software License 3.0.
    #[serde(rename = "NPOSL-3.0")]
    Nposl30,
    /// Display: NRL License
    /// Definition: NRL License.
    #[serde(rename = "NRL")]
    Nrl,
    /// Display: NTP License
    /// Definition: NTP License.
    #[serde(rename = "NTP")]
    Ntp,
    /// Display: Open CASCADE Technology Public License
    /// Definition: Open CASCADE Technology Public License.
    #[serde(rename = "OCCT-PL")]
    OcctPl,
    /// Display: OCLC Research Public License 2.0
    /// Definition: OCLC Research Public License 2.0.
    #[serde(rename = "OCLC-2.0")]
    Oclc20,
    /// Display: ODC Open Database License v1.0
    /// Definition: ODC Open Database License v1.0.
    #[serde(rename = "ODbL-1.0")]
    Odbl10,
    /// Display: SIL Open Font License 1.0
    /// Definition: SIL Open Font License 1.0.
    #[serde(rename = "OFL-1.0")]
    Ofl10,
    /// Display: SIL Open Font License 1.1
    /// Definition: SIL Open Font License 1.1.
    #[serde(rename = "OFL-1.1")]
    Ofl11,
    /// Display: Open Group Test Suite License
    /// Definition: Open Group Test Suite License.
    #[serde(rename = "OGTSL")]
    Ogtsl,
    /// Display: Open LDAP Public License v1.1
    /// Definition: Open LDAP Public License v1.1.
    #[serde(rename = "OLDAP-1.1")]
    Oldap11,
    /// Display: Open LDAP Public License v1.2
    /// Definition: Open LDAP Public License v1.2.
    #[serde(rename = "OLDAP-1.2")]
    Oldap12,
    /// Display: Open LDAP Public License v1.3
    /// Definition: Open LDAP Public License v1.3.
    #[serde(rename = "OLDAP-1.3")]
    Oldap13,
    /// Display: Open LDAP Public License v1.4
    /// Definition: Open LDAP Public License v1.4.
    #[serde(rename = "OLDAP-1.4")]
    Oldap14,
    /// Display: Open LDAP Public License v2.0.1
    /// Definition: Open LDAP Public License v2.0.1.
    #[serde(rename = "OLDAP-2.0.1")]
    Oldap201,
    /// Display: Open LDAP Public License v2.0 (or possibly 2.0A and 2.0B)
    /// Definition: Open LDAP Public License v2.0 (or possibly 2.0A and 2.0B).
    #[serde(rename = "OLDAP-2.0")]
    Oldap20,
    /// Display: Open LDAP Public License v2.1
    /// Definition: Open LDAP Public License v2.1.
    #[serde(rename = "OLDAP-2.1")]
    Oldap21,
    /// Display: Open LDAP Public License v2.2.1
    /// Definition: Open LDAP Public License v2.2.1.
    #[serde(rename = "OLDAP-2.2.1")]
    Oldap221,
    /// Display: Open LDAP Public License 2.2.2
    /// Definition: Open LDAP Public License 2.2.2.
    #[serde(rename = "OLDAP-2.2.2")]
    Oldap222,
    /// Display: Open LDAP Public License v2.2
    /// Definition: Open LDAP Public License v2.2.
    #[serde(rename = "OLDAP-2.2")]
    Oldap22,
    /// Display: Open LDAP Public License v2.3
    /// Definition: Open LDAP Public License v2.3.
    #[serde(rename = "OLDAP-2.3")]
    Oldap23,
    /// Display: Open LDAP Public License v2.4
    /// Definition: Open LDAP Public License v2.4.
    #[serde(rename = "OLDAP-2.4")]
    Oldap24,
    /// Display: Open LDAP Public License v2.5
    /// Definition: Open LDAP Public License v2.5.
    #[serde(rename = "OLDAP-2.5")]
    Oldap25,
    /// Display: Open LDAP Public License v2.6
    /// Definition: Open LDAP Public License v2.6.
    #[serde(rename = "OLDAP-2.6")]
    Oldap26,
    /// Display: Open LDAP Public License v2.7
    /// Definition: Open LDAP Public License v2.7.
    #[serde(rename = "OLDAP-2.7")]
    Oldap27,
    /// Display: Open LDAP Public License v2.8
    /// Definition: Open LDAP Public License v2.8.
    #[serde(rename = "OLDAP-2.8")]
    Oldap28,
    /// Display: Open Market License
    /// Definition: Open Market License.
    #[serde(rename = "OML")]
    Oml,
    /// Display: OpenSSL License
    /// Definition: OpenSSL License.
    #[serde(rename = "OpenSSL")]
    Openssl,
    /// Display: Open Public License v1.0
    /// Definition: Open Public License v1.0.
    #[serde(rename = "OPL-1.0")]
    Opl10,
    /// Display: OSET Public License version 2.1
    /// Definition: OSET Public License version 2.1.
    #[serde(rename = "OSET-PL-2.1")]
    OsetPl21,
    /// Display: Open Software License 1.0
    /// Definition: Open Software License 1.0.
    #[serde(rename = "OSL-1.0")]
    Osl10,
    /// Display: Open Software License 1.1
    /// Definition: Open Software License 1.1.
    #[serde(rename = "OSL-1.1")]
    Osl11,
    /// Display: Open Software License 2.0
    /// Definition: Open Software License 2.0.
    #[serde(rename = "OSL-2.0")]
    Osl20,
    /// Display: Open Software License 2.1
    /// Definition: Open Software License 2.1.
    #[serde(rename = "OSL-2.1")]
    Osl21,
    /// Display: Open Software License 3.0
    /// Definition: Open Software License 3.0.
    #[serde(rename = "OSL-3.0")]
    Osl30,
    /// Display: ODC Public Domain Dedication & License 1.0
    /// Definition: ODC Public Domain Dedication & License 1.0.
    #[serde(rename = "PDDL-1.0")]
    Pddl10,
    /// Display: PHP License v3.0
    /// Definition: PHP License v3.0.
    #[serde(rename = "PHP-3.0")]
    Php30,
    /// Display: PHP License v3.01
    /// Definition: PHP License v3.01.
    #[serde(rename = "PHP-3.01")]
    Php301,
    /// Display: Plexus Classworlds License
    /// Definition: Plexus Classworlds License.
    #[serde(rename = "Plexus")]
    Plexus,
    /// Display: PostgreSQL License
    /// Definition: PostgreSQL License.
    #[serde(rename = "PostgreSQL")]
    Postgresql,
    /// Display: psfrag License
    /// Definition: psfrag License.
    #[serde(rename = "psfrag")]
    Psfrag,
    /// Display: psutils License
    /// Definition: psutils License.
    #[serde(rename = "psutils")]
    Psutils,
    /// Display: Python License 2.0
    /// Definition: Python License 2.0.
    #[serde(rename = "Python-2.0")]
    Python20,
    /// Display: Qhull License
    /// Definition: Qhull License.
    #[serde(rename = "Qhull")]
    Qhull,
    /// Display: Q Public License 1.0
    /// Definition: Q Public License 1.0.
    #[serde(rename = "QPL-1.0")]
    Qpl10,
    /// Display: Rdisc License
    /// Definition: Rdisc License.
    #[serde(rename = "Rdisc")]
    Rdisc,
    /// Display: Red Hat eCos Public License v1.1
    /// Definition: Red Hat eCos Public License v1.1.
    #[serde(rename = "RHeCos-1.1")]
    Rhecos11,
    /// Display: Reciprocal Public License 1.1
    /// Definition: Reciprocal Public License 1.1.
    #[serde(rename = "RPL-1.1")]
    Rpl11,
    /// Display: Reciprocal Public License 1.5
    /// Definition: Reciprocal Public License 1.5.
    #[serde(rename = "RPL-1.5")]
    Rpl15,
    /// Display: RealNetworks Public Source License v1.0
    /// Definition: RealNetworks Public Source License v1.0.
    #[serde(rename = "RPSL-1.0")]
    Rpsl10,
    /// Display: RSA Message-Digest License
    /// Definition: RSA Message-Digest License.
    #[serde(rename = "RSA-MD")]
    RsaMd,
    /// Display: Ricoh Source Code Public License
    /// Definition: Ricoh Source Code Public License.
    #[serde(rename = "RSCPL")]
    Rscpl,
    /// Display: Ruby License
    /// Definition: Ruby License.
    #[serde(rename = "Ruby")]
    Ruby,
    /// Display: Sax Public Domain Notice
    /// Definition: Sax Public Domain Notice.
    #[serde(rename = "SAX-PD")]
    SaxPd,
    /// Display: Saxpath License
    /// Definition: Saxpath License.
    #[serde(rename = "Saxpath")]
    Saxpath,
    /// Display: SCEA Shared Source License
    /// Definition: SCEA Shared Source License.
    #[serde(rename = "SCEA")]
    Scea,
    /// Display: Sendmail License
    /// Definition: Sendmail License.
    #[serde(rename = "Sendmail")]
    Sendmail,
    /// Display: SGI Free Software License B v1.0
    /// Definition: SGI Free Software License B v1.0.
    #[serde(rename = "SGI-B-1.0")]
    SgiB10,
    /// Display: SGI Free Software License B v1.1
    /// Definition: SGI Free Software License B v1.1.
    #[serde(rename = "SGI-B-1.1")]
    SgiB11,
    /// Display: SGI Free Software License B v2.0
    /// Definition: SGI Free Software License B v2.0.
    #[serde(rename = "SGI-B-2.0")]
    SgiB20,
    /// Display: Simple Public License 2.0
    /// Definition: Simple Public License 2.0.
    #[serde(rename = "SimPL-2.0")]
    Simpl20,
    /// Display: Sun Industry Standards Source License v1.2
    /// Definition: Sun Industry Standards Source License v1.2.
    #[serde(rename = "SISSL-1.2")]
    Sissl12,
    /// Display: Sun Industry Standards Source License v1.1
    /// Definition: Sun Industry Standards Source License v1.1.
    #[serde(rename = "SISSL")]
    Sissl,
    /// Display: Sleepycat License
    /// Definition: Sleepycat License.
    #[serde(rename = "Sleepycat")]
    Sleepycat,
    /// Display: Standard ML of New Jersey License
    /// Definition: Standard ML of New Jersey License.
    #[serde(rename = "SMLNJ")]
    Smlnj,
    /// Display: Secure Messaging Protocol Public License
    /// Definition: Secure Messaging Protocol Public License.
    #[serde(rename = "SMPPL")]
    Smppl,
    /// Display: SNIA Public License 1.1
    /// Definition: SNIA Public License 1.1.
    #[serde(rename = "SNIA")]
    Snia,
    /// Display: Spencer License 86
    /// Definition: Spencer License 86.
    #[serde(rename = "Spencer-86")]
    Spencer86,
    /// Display: Spencer License 94
    /// Definition: Spencer License 94.
    #[serde(rename = "Spencer-94")]
    Spencer94,
    /// Display: Spencer License 99
    /// Definition: Spencer License 99.
    #[serde(rename = "Spencer-99")]
    Spencer99,
    /// Display: Sun Public License v1.0
    /// Definition: Sun Public License v1.0.
    #[serde(rename = "SPL-1.0")]
    Spl10,
    /// Display: SugarCRM Public License v1.1.3
    /// Definition: SugarCRM Public License v1.1.3.
    #[serde(rename = "SugarCRM-1.1.3")]
    Sugarcrm113,
    /// Display: Scheme Widget Library (SWL) Software License Agreement
    /// Definition: Scheme Widget Library (SWL) Software License Agreement.
    #[serde(rename = "SWL")]
    Swl,
    /// Display: TCL/TK License
    /// Definition: TCL/TK License.
    #[serde(rename = "TCL")]
    Tcl,
    /// Display: TCP Wrappers License
    /// Definition: TCP Wrappers License.
    #[serde(rename = "TCP-wrappers")]
    TcpWrappers,
    /// Display: TMate Open Source License
    /// Definition: TMate Open Source License.
    #[serde(rename = "TMate")]
    Tmate,
    /// Display: TORQUE v2.5+ Software License v1.1
    /// Definition: TORQUE v2.5+ Software License v1.1.
    #[serde(rename = "TORQUE-1.1")]
    Torque11,
    /// Display: Trusster Open Source License
    /// Definition: Trusster Open Source License.
    #[serde(rename = "TOSL")]
    Tosl,
    /// Display: Unicode License Agreement - Data Files and Software (2015)
    /// Definition: Unicode License Agreement - Data Files and Software (2015).
    #[serde(rename = "Unicode-DFS-2015")]
    UnicodeDfs2015,
    /// Display: Unicode License Agreement - Data Files and Software (2016)
    /// Definition: Unicode License Agreement - Data Files and Software (2016).
    #[serde(rename = "Unicode-DFS-2016")]
    UnicodeDfs2016,
    /// Display: Unicode Terms of Use
    /// Definition: Unicode Terms of Use.
    #[serde(rename = "Unicode-TOU")]
    UnicodeTou,
    /// Display: The Unlicense
    /// Definition: The Unlicense.
    #[serde(rename = "Unlicense")]
    Unlicense,
    /// Display: Universal Permissive License v1.0
    /// Definition: Universal Permissive License v1.0.
    #[serde(rename = "UPL-1.0")]
    Upl10,
    /// Display: Vim License
    /// Definition: Vim License.
    #[serde(rename = "Vim")]
    Vim,
    /// Display: VOSTROM Public License for Open Source
    /// Definition: VOSTROM Public License for Open Source.
    #[serde(rename = "VOSTROM")]
    Vostrom,
    /// Display: Vovida Software License v1.0
    /// Definition: Vovida Software License v1.0.
    #[serde(rename = "VSL-1.0")]
    Vsl10,
    /// Display: W3C Software Notice and License (1998-07-20)
    /// Definition: W3C Software Notice and License (1998-07-20).
    #[serde(rename = "W3C-19980720")]
    W3c19980720,
    /// Display: W3C Software Notice and Document License (2015-05-13)
    /// Definition: W3C Software Notice and Document License (2015-05-13).
    #[serde(rename = "W3C-20150513")]
    W3c20150513,
    /// Display: W3C Software Notice and License (2002-12-31)
    /// Definition: W3C Software Notice and License (2002-12-31).
    #[serde(rename = "W3C")]
    W3c,
    /// Display: Sybase Open Watcom Public License 1.0
    /// Definition: Sybase Open Watcom Public License 1.0.
    #[serde(rename = "Watcom-1.0")]
    Watcom10,
    /// Display: Wsuipa License
    /// Definition: Wsuipa License.
    #[serde(rename = "Wsuipa")]
    Wsuipa,
    /// Display: Do What The F*ck You Want To Public License
    /// Definition: Do What The F*ck You Want To Public License.
    #[serde(rename = "WTFPL")]
    Wtfpl,
    /// Display: X11 License
    /// Definition: X11 License.
    #[serde(rename = "X11")]
    X11,
    /// Display: Xerox License
    /// Definition: Xerox License.
    #[serde(rename = "Xerox")]
    Xerox,
    /// Display: XFree86 License 1.1
    /// Definition: XFree86 License 1.1.
    #[serde(rename = "XFree86-1.1")]
    Xfree8611,
    /// Display: xinetd License
    /// Definition: xinetd License.
    #[serde(rename = "xinetd")]
    Xinetd,
    /// Display: X.Net License
    /// Definition: X.Net License.
    #[serde(rename = "Xnet")]
    Xnet,
    /// Display: XPP License
    /// Definition: XPP License.
    #[serde(rename = "xpp")]
    Xpp,
    /// Display: XSkat License
    /// Definition: XSkat License.
    #[serde(rename = "XSkat")]
    Xskat,
    /// Display: Yahoo! Public License v1.0
    /// Definition: Yahoo! Public License v1.0.
    #[serde(rename = "YPL-1.0")]
    Ypl10,
    /// Display: Yahoo! Public License v1.1
    /// Definition: Yahoo! Public License v1.1.
    #[serde(rename = "YPL-1.1")]
    Ypl11,
    /// Display: Zed License
    /// Definition: Zed License.
    #[serde(rename = "Zed")]
    Zed,
    /// Display: Zend License v2.0
    /// Definition: Zend License v2.0.
    #[serde(rename = "Zend-2.0")]
    Zend20,
    /// Display: Zimbra Public License v1.3
    /// Definition: Zimbra Public License v1.3.
    #[serde(rename = "Zimbra-1.3")]
    Zimbra13,
    /// Display: Zimbra Public License v1.4
    /// Definition: Zimbra Public License v1.4.
    #[serde(rename = "Zimbra-1.4")]
    Zimbra14,
    /// Display: zlib/libpng License with Acknowledgement
    /// Definition: zlib/libpng License with Acknowledgement.
    #[serde(rename = "zlib-acknowledgement")]
    ZlibAcknowledgement,
    /// Display: zlib License
    /// Definition: zlib License.
    #[serde(rename = "Zlib")]
    Zlib,
    /// Display: Zope Public License 1.1
    /// Definition: Zope Public License 1.1.
    #[serde(rename = "ZPL-1.1")]
    Zpl11,
    /// Display: Zope Public License 2.0
    /// Definition: Zope Public License 2.0.
    #[serde(rename = "ZPL-2.0")]
    Zpl20,
    /// Display: Zope Public License 2.1
    /// Definition: Zope Public License 2.1.
    #[serde(rename = "ZPL-2.1")]
    Zpl21,
}
impl SPDXLicense {
    /// Concept table, in declaration order.
    pub const CONCEPTS: &'static [Concept<Self>] = &[
        Concept {
            value: SPDXLicense::NotOpenSource,
            code: "not-open-source",
            display: "Not open source",
            definition: Some("Not an open source license."),
        },
        Concept {
            value: SPDXLicense::N0bsd,
            code: "0BSD",
            display: "BSD Zero Clause License",
            definition: Some("BSD Zero Clause License."),
        },
        Concept {
            value: SPDXLicense::Aal,
            code: "AAL",
            display: "Attribution Assurance License",
            definition: Some("Attribution Assurance License."),
        },
        Concept {
            value: SPDXLicense::Abstyles,
            code: "Abstyles",
            display: "Abstyles License",
            definition: Some("Abstyles License."),
        },
        Concept {
            value: SPDXLicense::Adobe2006,
            code: "Adobe-2006",
            display: "Adobe Systems Incorporated Source Code License Agreement",
            definition: Some("Adobe Systems Incorporated Source Code License Agreement."),
        },
        Concept {
            value: SPDXLicense::AdobeGlyph,
            code: "Adobe-Glyph",
            display: "Adobe Glyph List License",
            definition: Some("Adobe Glyph List License."),
        },
        Concept {
            value: SPDXLicense::Adsl,
            code: "ADSL",
            display: "Amazon Digital Services License",
            definition: Some("Amazon Digital Services License."),
        },
        Concept {
            value: SPDXLicense::Afl11,
            code: "AFL-1.1",
            display: "Academic Free License v1.1",
            definition: Some("Academic Free License v1.1."),
        },
        Concept {
            value: SPDXLicense::Afl12,
            code: "AFL-1.2",
            display: "Academic Free License v1.2",
            definition: Some("Academic Free License v1.2."),
        },
        Concept {
            value: SPDXLicense::Afl20,
            code: "AFL-2.0",
            display: "Academic Free License v2.0",
            definition: Some("Academic Free License v2.0."),
        },
        Concept {
            value: SPDXLicense::Afl21,
            code: "AFL-2.1",
            display: "Academic Free License v2.1",
            definition: Some("Academic Free License v2.1."),
        },
        Concept {
            value: SPDXLicense::Afl30,
            code: "AFL-3.0",
            display: "Academic Free License v3.0",
            definition: Some("Academic Free License v3.0."),
        },
        Concept {
            value: SPDXLicense::Afmparse,
            code: "Afmparse",
            display: "Afmparse License",
            definition: Some("Afmparse License."),
        },
        Concept {
            value: SPDXLicense::Agpl10Only,
            code: "AGPL-1.0-only",
            display: "Affero General Public License v1.0 only",
            definition: Some("Affero General Public License v1.0 only."),
        },
        Concept {
            value: SPDXLicense::Agpl10OrLater,
            code: "AGPL-1.0-or-later",
            display: "Affero General Public License v1.0 or later",
            definition: Some("Affero General Public License v1.0 or later."),
        },
        Concept {
            value: SPDXLicense::Agpl30Only,
            code: "AGPL-3.0-only",
            display: "GNU Affero General Public License v3.0 only",
            definition: Some("GNU Affero General Public License v3.0 only."),
        },
        Concept {
            value: SPDXLicense::Agpl30OrLater,
            code: "AGPL-3.0-or-later",
            display: "GNU Affero General Public License v3.0 or later",
            definition: Some("GNU Affero General Public License v3.0 or later."),
        },
        Concept {
            value: SPDXLicense::Aladdin,
            code: "Aladdin",
            display: "Aladdin Free Public License",
            definition: Some("Aladdin Free Public License."),
        },
        Concept {
            value: SPDXLicense::Amdplpa,
            code: "AMDPLPA",
            display: "AMD's plpa_map.c License",
            definition: Some("AMD's plpa_map.c License."),
        },
        Concept {
            value: SPDXLicense::Aml,
            code: "AML",
            display: "Apple MIT License",
            definition: Some("Apple MIT License."),
        },
        Concept {
            value: SPDXLicense::Ampas,
            code: "AMPAS",
            display: "Academy of Motion Picture Arts and Sciences BSD",
            definition: Some("Academy of Motion Picture Arts and Sciences BSD."),
        },
        Concept {
            value: SPDXLicense::AntlrPd,
            code: "ANTLR-PD",
            display: "ANTLR Software Rights Notice",
            definition: Some("ANTLR Software Rights Notice."),
        },
        Concept {
            value: SPDXLicense::Apache10,
            code: "Apache-1.0",
            display: "Apache License 1.0",
            definition: Some("Apache License 1.0."),
        },
        Concept {
            value: SPDXLicense::Apache11,
            code: "Apache-1.1",
            display: "Apache License 1.1",
            definition: Some("Apache License 1.1."),
        },
        Concept {
            value: SPDXLicense::Apache20,
            code: "Apache-2.0",
            display: "Apache License 2.0",
            definition: Some("Apache License 2.0."),
        },
        Concept {
            value: SPDXLicense::Apafml,
            code: "APAFML",
            display: "Adobe Postscript AFM License",
            definition: Some("Adobe Postscript AFM License."),
        },
        Concept {
            value: SPDXLicense::Apl10,
            code: "APL-1.0",
            display: "Adaptive Public License 1.0",
            definition: Some("Adaptive Public License 1.0."),
        },
        Concept {
            value: SPDXLicense::Apsl10,
            code: "APSL-1.0",
            display: "Apple Public Source License 1.0",
            definition: Some("Apple Public Source License 1.0."),
        },
        Concept {
            value: SPDXLicense::Apsl11,
            code: "APSL-1.1",
            display: "Apple Public Source License 1.1",
            definition: Some("Apple Public Source License 1.1."),
        },
        Concept {
            value: SPDXLicense::Apsl12,
            code: "APSL-1.2",
            display: "Apple Public Source License 1.2",
            definition: Some("Apple Public Source License 1.2."),
        },
        Concept {
            value: SPDXLicense::Apsl20,
            code: "APSL-2.0",
            display: "Apple Public Source License 2.0",
            definition: Some("Apple Public Source License 2.0."),
        },
        Concept {
            value: SPDXLicense::Artistic10Cl8,
            code: "Artistic-1.0-cl8",
            display: "Artistic License 1.0 w/clause 8",
            definition: Some("Artistic License 1.0 w/clause 8."),
        },
        Concept {
            value: SPDXLicense::Artistic10Perl,
            code: "Artistic-1.0-Perl",
            display: "Artistic License 1.0 (Perl)",
            definition: Some("Artistic License 1.0 (Perl)."),
        },
        Concept {
            value: SPDXLicense::Artistic10,
            code: "Artistic-1.0",
            display: "Artistic License 1.0",
            definition: Some("Artistic License 1.0."),
        },
        Concept {
            value: SPDXLicense::Artistic20,
            code: "Artistic-2.0",
            display: "Artistic License 2.0",
            definition: Some("Artistic License 2.0."),
        },
        Concept {
            value: SPDXLicense::Bahyph,
            code: "Bahyph",
            display: "Bahyph License",
            definition: Some("Bahyph License."),
        },
        Concept {
            value: SPDXLicense::Barr,
            code: "Barr",
            display: "Barr License",
            definition: Some("Barr License."),
        },
        Concept {
            value: SPDXLicense::Beerware,
            code: "Beerware",
            display: "Beerware License",
            definition: Some("Beerware License."),
        },
        Concept {
            value: SPDXLicense::Bittorrent10,
            code: "BitTorrent-1.0",
            display: "BitTorrent Open Source License v1.0",
            definition: Some("BitTorrent Open Source License v1.0."),
        },
        Concept {
            value: SPDXLicense::Bittorrent11,
            code: "BitTorrent-1.1",
            display: "BitTorrent Open Source License v1.1",
            definition: Some("BitTorrent Open Source License v1.1."),
        },
        Concept {
            value: SPDXLicense::Borceux,
            code: "Borceux",
            display: "Borceux license",
            definition: Some("Borceux license."),
        },
        Concept {
            value: SPDXLicense::Bsd1Clause,
            code: "BSD-1-Clause",
            display: "BSD 1-Clause License",
            definition: Some("BSD 1-Clause License."),
        },
        Concept {
            value: SPDXLicense::Bsd2ClauseFreebsd,
            code: "BSD-2-Clause-FreeBSD",
            display: "BSD 2-Clause FreeBSD License",
            definition: Some("BSD 2-Clause FreeBSD License."),
        },
        Concept {
            value: SPDXLicense::Bsd2ClauseNetbsd,
            code: "BSD-2-Clause-NetBSD",
            display: "BSD 2-Clause NetBSD License",
            definition: Some("BSD 2-Clause NetBSD License."),
        },
        Concept {
            value: SPDXLicense::Bsd2ClausePatent,
            code: "BSD-2-Clause-Patent",
            display: "BSD-2-Clause Plus Patent License",
            definition: Some("BSD-2-Clause Plus Patent License."),
        },
        Concept {
            value: SPDXLicense::Bsd2Clause,
            code: "BSD-2-Clause",
            display: "BSD 2-Clause \"Simplified\" License",
            definition: Some("BSD 2-Clause \"Simplified\" License."),
        },
        Concept {
            value: SPDXLicense::Bsd3ClauseAttribution,
            code: "BSD-3-Clause-Attribution",
            display: "BSD with attribution",
            definition: Some("BSD with attribution."),
        },
        Concept {
            value: SPDXLicense::Bsd3ClauseClear,
            code: "BSD-3-Clause-Clear",
            display: "BSD 3-Clause Clear License",
            definition: Some("BSD 3-Clause Clear License."),
        },
        Concept {
            value: SPDXLicense::Bsd3ClauseLbnl,
            code: "BSD-3-Clause-LBNL",
            display: "Lawrence Berkeley National Labs BSD variant license",
            definition: Some("Lawrence Berkeley National Labs BSD variant license."),
        },
        Concept {
            value: SPDXLicense::Bsd3ClauseNoNuclearLicense2014,
            code: "BSD-3-Clause-No-Nuclear-License-2014",
            display: "BSD 3-Clause No Nuclear License 2014",
            definition: Some("BSD 3-Clause No Nuclear License 2014."),
        },
        Concept {
            value: SPDXLicense::Bsd3ClauseNoNuclearLicense,
            code: "BSD-3-Clause-No-Nuclear-License",
            display: "BSD 3-Clause No Nuclear License",
            definition: Some("BSD 3-Clause No Nuclear License."),
        },
        Concept {
            value: SPDXLicense::Bsd3ClauseNoNuclearWarranty,
            code: "BSD-3-Clause-No-Nuclear-Warranty",
            display: "BSD 3-Clause No Nuclear Warranty",
            definition: Some("BSD 3-Clause No Nuclear Warranty."),
        },
        Concept {
            value: SPDXLicense::Bsd3Clause,
            code: "BSD-3-Clause",
            display: "BSD 3-Clause \"New\" or \"Revised\" License",
            definition: Some("BSD 3-Clause \"New\" or \"Revised\" License."),
        },
        Concept {
            value: SPDXLicense::Bsd4ClauseUc,
            code: "BSD-4-Clause-UC",
            display: "BSD-4-Clause (University of California-Specific)",
            definition: Some("BSD-4-Clause (University of California-Specific)."),
        },
        Concept {
            value: SPDXLicense::Bsd4Clause,
            code: "BSD-4-Clause",
            display: "BSD 4-Clause \"Original\" or \"Old\" License",
            definition: Some("BSD 4-Clause \"Original\" or \"Old\" License."),
        },
        Concept {
            value: SPDXLicense::BsdProtection,
            code: "BSD-Protection",
            display: "BSD Protection License",
            definition: Some("BSD Protection License."),
        },
        Concept {
            value: SPDXLicense::BsdSourceCode,
            code: "BSD-Source-Code",
            display: "BSD Source Code Attribution",
            definition: Some("BSD Source Code Attribution."),
        },
        Concept {
            value: SPDXLicense::Bsl10,
            code: "BSL-1.0",
            display: "Boost Software License 1.0",
            definition: Some("Boost Software License 1.0."),
        },
        Concept {
            value: SPDXLicense::Bzip2105,
            code: "bzip2-1.0.5",
            display: "bzip2 and libbzip2 License v1.0.5",
            definition: Some("bzip2 and libbzip2 License v1.0.5."),
        },
        Concept {
            value: SPDXLicense::Bzip2106,
            code: "bzip2-1.0.6",
            display: "bzip2 and libbzip2 License v1.0.6",
            definition: Some("bzip2 and libbzip2 License v1.0.6."),
        },
        Concept {
            value: SPDXLicense::Caldera,
            code: "Caldera",
            display: "Caldera License",
            definition: Some("Caldera License."),
        },
        Concept {
            value: SPDXLicense::Catosl11,
            code: "CATOSL-1.1",
            display: "Computer Associates Trusted Open Source License 1.1",
            definition: Some("Computer Associates Trusted Open Source License 1.1."),
        },
        Concept {
            value: SPDXLicense::CcBy10,
            code: "CC-BY-1.0",
            display: "Creative Commons Attribution 1.0 Generic",
            definition: Some("Creative Commons Attribution 1.0 Generic."),
        },
        Concept {
            value: SPDXLicense::CcBy20,
            code: "CC-BY-2.0",
            display: "Creative Commons Attribution 2.0 Generic",
            definition: Some("Creative Commons Attribution 2.0 Generic."),
        },
        Concept {
            value: SPDXLicense::CcBy25,
            code: "CC-BY-2.5",
            display: "Creative Commons Attribution 2.5 Generic",
            definition: Some("Creative Commons Attribution 2.5 Generic."),
        },
        Concept {
            value: SPDXLicense::CcBy30,
            code: "CC-BY-3.0",
            display: "Creative Commons Attribution 3.0 Unported",
            definition: Some("Creative Commons Attribution 3.0 Unported."),
        },
        Concept {
            value: SPDXLicense::CcBy40,
            code: "CC-BY-4.0",
            display: "Creative Commons Attribution 4.0 International",
            definition: Some("Creative Commons Attribution 4.0 International."),
        },
        Concept {
            value: SPDXLicense::CcByNc10,
            code: "CC-BY-NC-1.0",
            display: "Creative Commons Attribution Non Commercial 1.0 Generic",
            definition: Some("Creative Commons Attribution Non Commercial 1.0 Generic."),
        },
        Concept {
            value: SPDXLicense::CcByNc20,
            code: "CC-BY-NC-2.0",
            display: "Creative Commons Attribution Non Commercial 2.0 Generic",
            definition: Some("Creative Commons Attribution Non Commercial 2.0 Generic."),
        },
        Concept {
            value: SPDXLicense::CcByNc25,
            code: "CC-BY-NC-2.5",
            display: "Creative Commons Attribution Non Commercial 2.5 Generic",
            definition: Some("Creative Commons Attribution Non Commercial 2.5 Generic."),
        },
        Concept {
            value: SPDXLicense::CcByNc30,
            code: "CC-BY-NC-3.0",
            display: "Creative Commons Attribution Non Commercial 3.0 Unported",
            definition: Some("Creative Commons Attribution Non Commercial 3.0 Unported."),
        },
        Concept {
            value: SPDXLicense::CcByNc40,
            code: "CC-BY-NC-4.0",
            display: "Creative Commons Attribution Non Commercial 4.0 International",
            definition: Some(
                "Creative Commons Attribution Non Commercial 4.0 International.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcNd10,
            code: "CC-BY-NC-ND-1.0",
            display: "Creative Commons Attribution Non Commercial No Derivatives 1.0 Generic",
            definition: Some(
                "Creative Commons Attribution Non Commercial No Derivatives 1.0 Generic.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcNd20,
            code: "CC-BY-NC-ND-2.0",
            display: "Creative Commons Attribution Non Commercial No Derivatives 2.0 Generic",
            definition: Some(
                "Creative Commons Attribution Non Commercial No Derivatives 2.0 Generic.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcNd25,
            code: "CC-BY-NC-ND-2.5",
            display: "Creative Commons Attribution Non Commercial No Derivatives 2.5 Generic",
            definition: Some(
                "Creative Commons Attribution Non Commercial No Derivatives 2.5 Generic.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcNd30,
            code: "CC-BY-NC-ND-3.0",
            display: "Creative Commons Attribution Non Commercial No Derivatives 3.0 Unported",
            definition: Some(
                "Creative Commons Attribution Non Commercial No Derivatives 3.0 Unported.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcNd40,
            code: "CC-BY-NC-ND-4.0",
            display: "Creative Commons Attribution Non Commercial No Derivatives 4.0 International",
            definition: Some(
                "Creative Commons Attribution Non Commercial No Derivatives 4.0 International.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcSa10,
            code: "CC-BY-NC-SA-1.0",
            display: "Creative Commons Attribution Non Commercial Share Alike 1.0 Generic",
            definition: Some(
                "Creative Commons Attribution Non Commercial Share Alike 1.0 Generic.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcSa20,
            code: "CC-BY-NC-SA-2.0",
            display: "Creative Commons Attribution Non Commercial Share Alike 2.0 Generic",
            definition: Some(
                "Creative Commons Attribution Non Commercial Share Alike 2.0 Generic.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcSa25,
            code: "CC-BY-NC-SA-2.5",
            display: "Creative Commons Attribution Non Commercial Share Alike 2.5 Generic",
            definition: Some(
                "Creative Commons Attribution Non Commercial Share Alike 2.5 Generic.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcSa30,
            code: "CC-BY-NC-SA-3.0",
            display: "Creative Commons Attribution Non Commercial Share Alike 3.0 Unported",
            definition: Some(
                "Creative Commons Attribution Non Commercial Share Alike 3.0 Unported.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNcSa40,
            code: "CC-BY-NC-SA-4.0",
            display: "Creative Commons Attribution Non Commercial Share Alike 4.0 International",
            definition: Some(
                "Creative Commons Attribution Non Commercial Share Alike 4.0 International.",
            ),
        },
        Concept {
            value: SPDXLicense::CcByNd10,
            code: "CC-BY-ND-1.0",
            display: "Creative Commons Attribution No Derivatives 1.0 Generic",
            definition: Some("Creative Commons Attribution No Derivatives 1.0 Generic."),
        },
        Concept {
            value: SPDXLicense::CcByNd20,
            code: "CC-BY-ND-2.0",
            display: "Creative Commons Attribution No Derivatives 2.0 Generic",
            definition: Some("Creative Commons Attribution No Derivatives 2.0 Generic."),
        },
        Concept {
            value: SPDXLicense::CcByNd25,
            code: "CC-BY-ND-2.5",
            display: "Creative Commons Attribution No Derivatives 2.5 Generic",
            definition: Some("Creative Commons Attribution No Derivatives 2.5 Generic."),
        },
        Concept {
            value: SPDXLicense::CcByNd30,
            code: "CC-BY-ND-3.0",
            display: "Creative Commons Attribution No Derivatives 3.0 Unported",
            definition: Some("Creative Commons Attribution No Derivatives 3.0 Unported."),
        },
        Concept {
            value: SPDXLicense::CcByNd40,
            code: "CC-BY-ND-4.0",
            display: "Creative Commons Attribution No Derivatives 4.0 International",
            definition: Some(
                "Creative Commons Attribution No Derivatives 4.0 International.",
            ),
        },
        Concept {
            value: SPDXLicense::CcBySa10,
            code: "CC-BY-SA-1.0",
            display: "Creative Commons Attribution Share Alike 1.0 Generic",
            definition: Some("Creative Commons Attribution Share Alike 1.0 Generic."),
        },
        Concept {
            value: SPDXLicense::CcBySa20,
            code: "CC-BY-SA-2.0",
            display: "Creative Commons Attribution Share Alike 2.0 Generic",
            definition: Some("Creative Commons Attribution Share Alike 2.0 Generic."),
        },
        Concept {
            value: SPDXLicense::CcBySa25,
            code: "CC-BY-SA-2.5",
            display: "Creative Commons Attribution Share Alike 2.5 Generic",
            definition: Some("Creative Commons Attribution Share Alike 2.5 Generic."),
        },
        Concept {
            value: SPDXLicense::CcBySa30,
            code: "CC-BY-SA-3.0",
            display: "Creative Commons Attribution Share Alike 3.0 Unported",
            definition: Some("Creative Commons Attribution Share Alike 3.0 Unported."),
        },
        Concept {
            value: SPDXLicense::CcBySa40,
            code: "CC-BY-SA-4.0",
            display: "Creative Commons Attribution Share Alike 4.0 International",
            definition: Some(
                "Creative Commons Attribution Share Alike 4.0 International.",
            ),
        },
        Concept {
            value: SPDXLicense::Cc010,
            code: "CC0-1.0",
            display: "Creative Commons Zero v1.0 Universal",
            definition: Some("Creative Commons Zero v1.0 Universal."),
        },
        Concept {
            value: SPDXLicense::Cddl10,
            code: "CDDL-1.0",
            display: "Common Development and Distribution License 1.0",
            definition: Some("Common Development and Distribution License 1.0."),
        },
        Concept {
            value: SPDXLicense::Cddl11,
            code: "CDDL-1.1",
            display: "Common Development and Distribution License 1.1",
            definition: Some("Common Development and Distribution License 1.1."),
        },
        Concept {
            value: SPDXLicense::CdlaPermissive10,
            code: "CDLA-Permissive-1.0",
            display: "Community Data License Agreement Permissive 1.0",
            definition: Some("Community Data License Agreement Permissive 1.0."),
        },
        Concept {
            value: SPDXLicense::CdlaSharing10,
            code: "CDLA-Sharing-1.0",
            display: "Community Data License Agreement Sharing 1.0",
            definition: Some("Community Data License Agreement Sharing 1.0."),
        },
        Concept {
            value: SPDXLicense::Cecill10,
            code: "CECILL-1.0",
            display: "CeCILL Free Software License Agreement v1.0",
            definition: Some("CeCILL Free Software License Agreement v1.0."),
        },
        Concept {
            value: SPDXLicense::Cecill11,
            code: "CECILL-1.1",
            display: "CeCILL Free Software License Agreement v1.1",
            definition: Some("CeCILL Free Software License Agreement v1.1."),
        },
        Concept {
            value: SPDXLicense::Cecill20,
            code: "CECILL-2.0",
            display: "CeCILL Free Software License Agreement v2.0",
            definition: Some("CeCILL Free Software License Agreement v2.0."),
        },
        Concept {
            value: SPDXLicense::Cecill21,
            code: "CECILL-2.1",
            display: "CeCILL Free Software License Agreement v2.1",
            definition: Some("CeCILL Free Software License Agreement v2.1."),
        },
        Concept {
            value: SPDXLicense::CecillB,
            code: "CECILL-B",
            display: "CeCILL-B Free Software License Agreement",
            definition: Some("CeCILL-B Free Software License Agreement."),
        },
        Concept {
            value: SPDXLicense::CecillC,
            code: "CECILL-C",
            display: "CeCILL-C Free Software License Agreement",
            definition: Some("CeCILL-C Free Software License Agreement."),
        },
        Concept {
            value: SPDXLicense::Clartistic,
            code: "ClArtistic",
            display: "Clarified Artistic License",
            definition: Some("Clarified Artistic License."),
        },
        Concept {
            value: SPDXLicense::CnriJython,
            code: "CNRI-Jython",
            display: "CNRI Jython License",
            definition: Some("CNRI Jython License."),
        },
        Concept {
            value: SPDXLicense::CnriPythonGplCompatible,
            code: "CNRI-Python-GPL-Compatible",
            display: "CNRI Python Open Source GPL Compatible License Agreement",
            definition: Some("CNRI Python Open Source GPL Compatible License Agreement."),
        },
        Concept {
            value: SPDXLicense::CnriPython,
            code: "CNRI-Python",
            display: "CNRI Python License",
            definition: Some("CNRI Python License."),
        },
        Concept {
            value: SPDXLicense::Condor11,
            code: "Condor-1.1",
            display: "Condor Public License v1.1",
            definition: Some("Condor Public License v1.1."),
        },
        Concept {
            value: SPDXLicense::Cpal10,
            code: "CPAL-1.0",
            display: "Common Public Attribution License 1.0",
            definition: Some("Common Public Attribution License 1.0."),
        },
        Concept {
            value: SPDXLicense::Cpl10,
            code: "CPL-1.0",
            display: "Common Public License 1.0",
            definition: Some("Common Public License 1.0."),
        },
        Concept {
            value: SPDXLicense::Cpol102,
            code: "CPOL-1.02",
            display: "Code Project Open License 1.02",
            definition: Some("Code Project Open License 1.02."),
        },
        Concept {
            value: SPDXLicense::Crossword,
            code: "Crossword",
            display: "Crossword License",
            definition: Some("Crossword License."),
        },
        Concept {
            value: SPDXLicense::Crystalstacker,
            code: "CrystalStacker",
            display: "CrystalStacker License",
            definition: Some("CrystalStacker License."),
        },
        Concept {
            value: SPDXLicense::CuaOpl10,
            code: "CUA-OPL-1.0",
            display: "CUA Office Public License v1.0",
            definition: Some("CUA Office Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Cube,
            code: "Cube",
            display: "Cube License",
            definition: Some("Cube License."),
        },
        Concept {
            value: SPDXLicense::Curl,
            code: "curl",
            display: "curl License",
            definition: Some("curl License."),
        },
        Concept {
            value: SPDXLicense::DFsl10,
            code: "D-FSL-1.0",
            display: "Deutsche Freie Software Lizenz",
            definition: Some("Deutsche Freie Software Lizenz."),
        },
        Concept {
            value: SPDXLicense::Diffmark,
            code: "diffmark",
            display: "diffmark license",
            definition: Some("diffmark license."),
        },
        Concept {
            value: SPDXLicense::Doc,
            code: "DOC",
            display: "DOC License",
            definition: Some("DOC License."),
        },
        Concept {
            value: SPDXLicense::Dotseqn,
            code: "Dotseqn",
            display: "Dotseqn License",
            definition: Some("Dotseqn License."),
        },
        Concept {
            value: SPDXLicense::Dsdp,
            code: "DSDP",
            display: "DSDP License",
            definition: Some("DSDP License."),
        },
        Concept {
            value: SPDXLicense::Dvipdfm,
            code: "dvipdfm",
            display: "dvipdfm License",
            definition: Some("dvipdfm License."),
        },
        Concept {
            value: SPDXLicense::Ecl10,
            code: "ECL-1.0",
            display: "Educational Community License v1.0",
            definition: Some("Educational Community License v1.0."),
        },
        Concept {
            value: SPDXLicense::Ecl20,
            code: "ECL-2.0",
            display: "Educational Community License v2.0",
            definition: Some("Educational Community License v2.0."),
        },
        Concept {
            value: SPDXLicense::Efl10,
            code: "EFL-1.0",
            display: "Eiffel Forum License v1.0",
            definition: Some("Eiffel Forum License v1.0."),
        },
        Concept {
            value: SPDXLicense::Efl20,
            code: "EFL-2.0",
            display: "Eiffel Forum License v2.0",
            definition: Some("Eiffel Forum License v2.0."),
        },
        Concept {
            value: SPDXLicense::Egenix,
            code: "eGenix",
            display: "eGenix.com Public License 1.1.0",
            definition: Some("eGenix.com Public License 1.1.0."),
        },
        Concept {
            value: SPDXLicense::Entessa,
            code: "Entessa",
            display: "Entessa Public License v1.0",
            definition: Some("Entessa Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Epl10,
            code: "EPL-1.0",
            display: "Eclipse Public License 1.0",
            definition: Some("Eclipse Public License 1.0."),
        },
        Concept {
            value: SPDXLicense::Epl20,
            code: "EPL-2.0",
            display: "Eclipse Public License 2.0",
            definition: Some("Eclipse Public License 2.0."),
        },
        Concept {
            value: SPDXLicense::Erlpl11,
            code: "ErlPL-1.1",
            display: "Erlang Public License v1.1",
            definition: Some("Erlang Public License v1.1."),
        },
        Concept {
            value: SPDXLicense::Eudatagrid,
            code: "EUDatagrid",
            display: "EU DataGrid Software License",
            definition: Some("EU DataGrid Software License."),
        },
        Concept {
            value: SPDXLicense::Eupl10,
            code: "EUPL-1.0",
            display: "European Union Public License 1.0",
            definition: Some("European Union Public License 1.0."),
        },
        Concept {
            value: SPDXLicense::Eupl11,
            code: "EUPL-1.1",
            display: "European Union Public License 1.1",
            definition: Some("European Union Public License 1.1."),
        },
        Concept {
            value: SPDXLicense::Eupl12,
            code: "EUPL-1.2",
            display: "European Union Public License 1.2",
            definition: Some("European Union Public License 1.2."),
        },
        Concept {
            value: SPDXLicense::Eurosym,
            code: "Eurosym",
            display: "Eurosym License",
            definition: Some("Eurosym License."),
        },
        Concept {
            value: SPDXLicense::Fair,
            code: "Fair",
            display: "Fair License",
            definition: Some("Fair License."),
        },
        Concept {
            value: SPDXLicense::Frameworx10,
            code: "Frameworx-1.0",
            display: "Frameworx Open License 1.0",
            definition: Some("Frameworx Open License 1.0."),
        },
        Concept {
            value: SPDXLicense::Freeimage,
            code: "FreeImage",
            display: "FreeImage Public License v1.0",
            definition: Some("FreeImage Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Fsfap,
            code: "FSFAP",
            display: "FSF All Permissive License",
            definition: Some("FSF All Permissive License."),
        },
        Concept {
            value: SPDXLicense::Fsful,
            code: "FSFUL",
            display: "FSF Unlimited License",
            definition: Some("FSF Unlimited License."),
        },
        Concept {
            value: SPDXLicense::Fsfullr,
            code: "FSFULLR",
            display: "FSF Unlimited License (with License Retention)",
            definition: Some("FSF Unlimited License (with License Retention)."),
        },
        Concept {
            value: SPDXLicense::Ftl,
            code: "FTL",
            display: "Freetype Project License",
            definition: Some("Freetype Project License."),
        },
        Concept {
            value: SPDXLicense::Gfdl11Only,
            code: "GFDL-1.1-only",
            display: "GNU Free Documentation License v1.1 only",
            definition: Some("GNU Free Documentation License v1.1 only."),
        },
        Concept {
            value: SPDXLicense::Gfdl11OrLater,
            code: "GFDL-1.1-or-later",
            display: "GNU Free Documentation License v1.1 or later",
            definition: Some("GNU Free Documentation License v1.1 or later."),
        },
        Concept {
            value: SPDXLicense::Gfdl12Only,
            code: "GFDL-1.2-only",
            display: "GNU Free Documentation License v1.2 only",
            definition: Some("GNU Free Documentation License v1.2 only."),
        },
        Concept {
            value: SPDXLicense::Gfdl12OrLater,
            code: "GFDL-1.2-or-later",
            display: "GNU Free Documentation License v1.2 or later",
            definition: Some("GNU Free Documentation License v1.2 or later."),
        },
        Concept {
            value: SPDXLicense::Gfdl13Only,
            code: "GFDL-1.3-only",
            display: "GNU Free Documentation License v1.3 only",
            definition: Some("GNU Free Documentation License v1.3 only."),
        },
        Concept {
            value: SPDXLicense::Gfdl13OrLater,
            code: "GFDL-1.3-or-later",
            display: "GNU Free Documentation License v1.3 or later",
            definition: Some("GNU Free Documentation License v1.3 or later."),
        },
        Concept {
            value: SPDXLicense::Giftware,
            code: "Giftware",
            display: "Giftware License",
            definition: Some("Giftware License."),
        },
        Concept {
            value: SPDXLicense::Gl2ps,
            code: "GL2PS",
            display: "GL2PS License",
            definition: Some("GL2PS License."),
        },
        Concept {
            value: SPDXLicense::Glide,
            code: "Glide",
            display: "3dfx Glide License",
            definition: Some("3dfx Glide License."),
        },
        Concept {
            value: SPDXLicense::Glulxe,
            code: "Glulxe",
            display: "Glulxe License",
            definition: Some("Glulxe License."),
        },
        Concept {
            value: SPDXLicense::Gnuplot,
            code: "gnuplot",
            display: "gnuplot License",
            definition: Some("gnuplot License."),
        },
        Concept {
            value: SPDXLicense::Gpl10Only,
            code: "GPL-1.0-only",
            display: "GNU General Public License v1.0 only",
            definition: Some("GNU General Public License v1.0 only."),
        },
        Concept {
            value: SPDXLicense::Gpl10OrLater,
            code: "GPL-1.0-or-later",
            display: "GNU General Public License v1.0 or later",
            definition: Some("GNU General Public License v1.0 or later."),
        },
        Concept {
            value: SPDXLicense::Gpl20Only,
            code: "GPL-2.0-only",
            display: "GNU General Public License v2.0 only",
            definition: Some("GNU General Public License v2.0 only."),
        },
        Concept {
            value: SPDXLicense::Gpl20OrLater,
            code: "GPL-2.0-or-later",
            display: "GNU General Public License v2.0 or later",
            definition: Some("GNU General Public License v2.0 or later."),
        },
        Concept {
            value: SPDXLicense::Gpl30Only,
            code: "GPL-3.0-only",
            display: "GNU General Public License v3.0 only",
            definition: Some("GNU General Public License v3.0 only."),
        },
        Concept {
            value: SPDXLicense::Gpl30OrLater,
            code: "GPL-3.0-or-later",
            display: "GNU General Public License v3.0 or later",
            definition: Some("GNU General Public License v3.0 or later."),
        },
        Concept {
            value: SPDXLicense::Gsoap13b,
            code: "gSOAP-1.3b",
            display: "gSOAP Public License v1.3b",
            definition: Some("gSOAP Public License v1.3b."),
        },
        Concept {
            value: SPDXLicense::Haskellreport,
            code: "HaskellReport",
            display: "Haskell Language Report License",
            definition: Some("Haskell Language Report License."),
        },
        Concept {
            value: SPDXLicense::Hpnd,
            code: "HPND",
            display: "Historical Permission Notice and Disclaimer",
            definition: Some("Historical Permission Notice and Disclaimer."),
        },
        Concept {
            value: SPDXLicense::IbmPibs,
            code: "IBM-pibs",
            display: "IBM PowerPC Initialization and Boot Software",
            definition: Some("IBM PowerPC Initialization and Boot Software."),
        },
        Concept {
            value: SPDXLicense::Icu,
            code: "ICU",
            display: "ICU License",
            definition: Some("ICU License."),
        },
        Concept {
            value: SPDXLicense::Ijg,
            code: "IJG",
            display: "Independent JPEG Group License",
            definition: Some("Independent JPEG Group License."),
        },
        Concept {
            value: SPDXLicense::Imagemagick,
            code: "ImageMagick",
            display: "ImageMagick License",
            definition: Some("ImageMagick License."),
        },
        Concept {
            value: SPDXLicense::Imatix,
            code: "iMatix",
            display: "iMatix Standard Function Library Agreement",
            definition: Some("iMatix Standard Function Library Agreement."),
        },
        Concept {
            value: SPDXLicense::Imlib2,
            code: "Imlib2",
            display: "Imlib2 License",
            definition: Some("Imlib2 License."),
        },
        Concept {
            value: SPDXLicense::InfoZip,
            code: "Info-ZIP",
            display: "Info-ZIP License",
            definition: Some("Info-ZIP License."),
        },
        Concept {
            value: SPDXLicense::IntelAcpi,
            code: "Intel-ACPI",
            display: "Intel ACPI Software License Agreement",
            definition: Some("Intel ACPI Software License Agreement."),
        },
        Concept {
            value: SPDXLicense::Intel,
            code: "Intel",
            display: "Intel Open Source License",
            definition: Some("Intel Open Source License."),
        },
        Concept {
            value: SPDXLicense::Interbase10,
            code: "Interbase-1.0",
            display: "Interbase Public License v1.0",
            definition: Some("Interbase Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Ipa,
            code: "IPA",
            display: "IPA Font License",
            definition: Some("IPA Font License."),
        },
        Concept {
            value: SPDXLicense::Ipl10,
            code: "IPL-1.0",
            display: "IBM Public License v1.0",
            definition: Some("IBM Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Isc,
            code: "ISC",
            display: "ISC License",
            definition: Some("ISC License."),
        },
        Concept {
            value: SPDXLicense::Jasper20,
            code: "JasPer-2.0",
            display: "JasPer License",
            definition: Some("JasPer License."),
        },
        Concept {
            value: SPDXLicense::Json,
            code: "JSON",
            display: "JSON License",
            definition: Some("JSON License."),
        },
        Concept {
            value: SPDXLicense::Lal12,
            code: "LAL-1.2",
            display: "Licence Art Libre 1.2",
            definition: Some("Licence Art Libre 1.2."),
        },
        Concept {
            value: SPDXLicense::Lal13,
            code: "LAL-1.3",
            display: "Licence Art Libre 1.3",
            definition: Some("Licence Art Libre 1.3."),
        },
        Concept {
            value: SPDXLicense::Latex2e,
            code: "Latex2e",
            display: "Latex2e License",
            definition: Some("Latex2e License."),
        },
        Concept {
            value: SPDXLicense::Leptonica,
            code: "Leptonica",
            display: "Leptonica License",
            definition: Some("Leptonica License."),
        },
        Concept {
            value: SPDXLicense::Lgpl20Only,
            code: "LGPL-2.0-only",
            display: "GNU Library General Public License v2 only",
            definition: Some("GNU Library General Public License v2 only."),
        },
        Concept {
            value: SPDXLicense::Lgpl20OrLater,
            code: "LGPL-2.0-or-later",
            display: "GNU Library General Public License v2 or later",
            definition: Some("GNU Library General Public License v2 or later."),
        },
        Concept {
            value: SPDXLicense::Lgpl21Only,
            code: "LGPL-2.1-only",
            display: "GNU Lesser General Public License v2.1 only",
            definition: Some("GNU Lesser General Public License v2.1 only."),
        },
        Concept {
            value: SPDXLicense::Lgpl21OrLater,
            code: "LGPL-2.1-or-later",
            display: "GNU Lesser General Public License v2.1 or later",
            definition: Some("GNU Lesser General Public License v2.1 or later."),
        },
        Concept {
            value: SPDXLicense::Lgpl30Only,
            code: "LGPL-3.0-only",
            display: "GNU Lesser General Public License v3.0 only",
            definition: Some("GNU Lesser General Public License v3.0 only."),
        },
        Concept {
            value: SPDXLicense::Lgpl30OrLater,
            code: "LGPL-3.0-or-later",
            display: "GNU Lesser General Public License v3.0 or later",
            definition: Some("GNU Lesser General Public License v3.0 or later."),
        },
        Concept {
            value: SPDXLicense::Lgpllr,
            code: "LGPLLR",
            display: "Lesser General Public License For Linguistic Resources",
            definition: Some("Lesser General Public License For Linguistic Resources."),
        },
        Concept {
            value: SPDXLicense::Libpng,
            code: "Libpng",
            display: "libpng License",
            definition: Some("libpng License."),
        },
        Concept {
            value: SPDXLicense::Libtiff,
            code: "libtiff",
            display: "libtiff License",
            definition: Some("libtiff License."),
        },
        Concept {
            value: SPDXLicense::LiliqP11,
            code: "LiLiQ-P-1.1",
            display: "Licence Libre du Québec – Permissive version 1.1",
            definition: Some("Licence Libre du Québec – Permissive version 1.1."),
        },
        Concept {
            value: SPDXLicense::LiliqR11,
            code: "LiLiQ-R-1.1",
            display: "Licence Libre du Québec – Réciprocité version 1.1",
            definition: Some("Licence Libre du Québec – Réciprocité version 1.1."),
        },
        Concept {
            value: SPDXLicense::LiliqRplus11,
            code: "LiLiQ-Rplus-1.1",
            display: "Licence Libre du Québec – Réciprocité forte version 1.1",
            definition: Some(
                "Licence Libre du Québec – Réciprocité forte version 1.1.",
            ),
        },
        Concept {
            value: SPDXLicense::LinuxOpenib,
            code: "Linux-OpenIB",
            display: "Linux Kernel Variant of OpenIB.org license",
            definition: Some("Linux Kernel Variant of OpenIB.org license."),
        },
        Concept {
            value: SPDXLicense::Lpl10,
            code: "LPL-1.0",
            display: "Lucent Public License Version 1.0",
            definition: Some("Lucent Public License Version 1.0."),
        },
        Concept {
            value: SPDXLicense::Lpl102,
            code: "LPL-1.02",
            display: "Lucent Public License v1.02",
            definition: Some("Lucent Public License v1.02."),
        },
        Concept {
            value: SPDXLicense::Lppl10,
            code: "LPPL-1.0",
            display: "LaTeX Project Public License v1.0",
            definition: Some("LaTeX Project Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Lppl11,
            code: "LPPL-1.1",
            display: "LaTeX Project Public License v1.1",
            definition: Some("LaTeX Project Public License v1.1."),
        },
        Concept {
            value: SPDXLicense::Lppl12,
            code: "LPPL-1.2",
            display: "LaTeX Project Public License v1.2",
            definition: Some("LaTeX Project Public License v1.2."),
        },
        Concept {
            value: SPDXLicense::Lppl13a,
            code: "LPPL-1.3a",
            display: "LaTeX Project Public License v1.3a",
            definition: Some("LaTeX Project Public License v1.3a."),
        },
        Concept {
            value: SPDXLicense::Lppl13c,
            code: "LPPL-1.3c",
            display: "LaTeX Project Public License v1.3c",
            definition: Some("LaTeX Project Public License v1.3c."),
        },
        Concept {
            value: SPDXLicense::Makeindex,
            code: "MakeIndex",
            display: "MakeIndex License",
            definition: Some("MakeIndex License."),
        },
        Concept {
            value: SPDXLicense::Miros,
            code: "MirOS",
            display: "MirOS License",
            definition: Some("MirOS License."),
        },
        Concept {
            value: SPDXLicense::Mit0,
            code: "MIT-0",
            display: "MIT No Attribution",
            definition: Some("MIT No Attribution."),
        },
        Concept {
            value: SPDXLicense::MitAdvertising,
            code: "MIT-advertising",
            display: "Enlightenment License (e16)",
            definition: Some("Enlightenment License (e16)."),
        },
        Concept {
            value: SPDXLicense::MitCmu,
            code: "MIT-CMU",
            display: "CMU License",
            definition: Some("CMU License."),
        },
        Concept {
            value: SPDXLicense::MitEnna,
            code: "MIT-enna",
            display: "enna License",
            definition: Some("enna License."),
        },
        Concept {
            value: SPDXLicense::MitFeh,
            code: "MIT-feh",
            display: "feh License",
            definition: Some("feh License."),
        },
        Concept {
            value: SPDXLicense::Mit,
            code: "MIT",
            display: "MIT License",
            definition: Some("MIT License."),
        },
        Concept {
            value: SPDXLicense::Mitnfa,
            code: "MITNFA",
            display: "MIT +no-false-attribs license",
            definition: Some("MIT +no-false-attribs license."),
        },
        Concept {
            value: SPDXLicense::Motosoto,
            code: "Motosoto",
            display: "Motosoto License",
            definition: Some("Motosoto License."),
        },
        Concept {
            value: SPDXLicense::Mpich2,
            code: "mpich2",
            display: "mpich2 License",
            definition: Some("mpich2 License."),
        },
        Concept {
            value: SPDXLicense::Mpl10,
            code: "MPL-1.0",
            display: "Mozilla Public License 1.0",
            definition: Some("Mozilla Public License 1.0."),
        },
        Concept {
            value: SPDXLicense::Mpl11,
            code: "MPL-1.1",
            display: "Mozilla Public License 1.1",
            definition: Some("Mozilla Public License 1.1."),
        },
        Concept {
            value: SPDXLicense::Mpl20NoCopyleftException,
            code: "MPL-2.0-no-copyleft-exception",
            display: "Mozilla Public License 2.0 (no copyleft exception)",
            definition: Some("Mozilla Public License 2.0 (no copyleft exception)."),
        },
        Concept {
            value: SPDXLicense::Mpl20,
            code: "MPL-2.0",
            display: "Mozilla Public License 2.0",
            definition: Some("Mozilla Public License 2.0."),
        },
        Concept {
            value: SPDXLicense::MsPl,
            code: "MS-PL",
            display: "Microsoft Public License",
            definition: Some("Microsoft Public License."),
        },
        Concept {
            value: SPDXLicense::MsRl,
            code: "MS-RL",
            display: "Microsoft Reciprocal License",
            definition: Some("Microsoft Reciprocal License."),
        },
        Concept {
            value: SPDXLicense::Mtll,
            code: "MTLL",
            display: "Matrix Template Library License",
            definition: Some("Matrix Template Library License."),
        },
        Concept {
            value: SPDXLicense::Multics,
            code: "Multics",
            display: "Multics License",
            definition: Some("Multics License."),
        },
        Concept {
            value: SPDXLicense::Mup,
            code: "Mup",
            display: "Mup License",
            definition: Some("Mup License."),
        },
        Concept {
            value: SPDXLicense::Nasa13,
            code: "NASA-1.3",
            display: "NASA Open Source Agreement 1.3",
            definition: Some("NASA Open Source Agreement 1.3."),
        },
        Concept {
            value: SPDXLicense::Naumen,
            code: "Naumen",
            display: "Naumen Public License",
            definition: Some("Naumen Public License."),
        },
        Concept {
            value: SPDXLicense::Nbpl10,
            code: "NBPL-1.0",
            display: "Net Boolean Public License v1",
            definition: Some("Net Boolean Public License v1."),
        },
        Concept {
            value: SPDXLicense::Ncsa,
            code: "NCSA",
            display: "University of Illinois/NCSA Open Source License",
            definition: Some("University of Illinois/NCSA Open Source License."),
        },
        Concept {
            value: SPDXLicense::NetSnmp,
            code: "Net-SNMP",
            display: "Net-SNMP License",
            definition: Some("Net-SNMP License."),
        },
        Concept {
            value: SPDXLicense::Netcdf,
            code: "NetCDF",
            display: "NetCDF license",
            definition: Some("NetCDF license."),
        },
        Concept {
            value: SPDXLicense::Newsletr,
            code: "Newsletr",
            display: "Newsletr License",
            definition: Some("Newsletr License."),
        },
        Concept {
            value: SPDXLicense::Ngpl,
            code: "NGPL",
            display: "Nethack General Public License",
            definition: Some("Nethack General Public License."),
        },
        Concept {
            value: SPDXLicense::Nlod10,
            code: "NLOD-1.0",
            display: "Norwegian Licence for Open Government Data",
            definition: Some("Norwegian Licence for Open Government Data."),
        },
        Concept {
            value: SPDXLicense::Nlpl,
            code: "NLPL",
            display: "No Limit Public License",
            definition: Some("No Limit Public License."),
        },
        Concept {
            value: SPDXLicense::Nokia,
            code: "Nokia",
            display: "Nokia Open Source License",
            definition: Some("Nokia Open Source License."),
        },
        Concept {
            value: SPDXLicense::Nosl,
            code: "NOSL",
            display: "Netizen Open Source License",
            definition: Some("Netizen Open Source License."),
        },
        Concept {
            value: SPDXLicense::Noweb,
            code: "Noweb",
            display: "Noweb License",
            definition: Some("Noweb License."),
        },
        Concept {
            value: SPDXLicense::Npl10,
            code: "NPL-1.0",
            display: "Netscape Public License v1.0",
            definition: Some("Netscape Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Npl11,
            code: "NPL-1.1",
            display: "Netscape Public License v1.1",
            definition: Some("Netscape Public License v1.1."),
        },
        Concept {
            value: SPDXLicense::Nposl30,
            code: "NPOSL-3.0",
            display: "Non-Profit Open Software License 3.0",
            definition: Some("Non-Profit Open Software License 3.0."),
        },
        Concept {
            value: SPDXLicense::Nrl,
            code: "NRL",
            display: "NRL License",
            definition: Some("NRL License."),
        },
        Concept {
            value: SPDXLicense::Ntp,
            code: "NTP",
            display: "NTP License",
            definition: Some("NTP License."),
        },
        Concept {
            value: SPDXLicense::OcctPl,
            code: "OCCT-PL",
            display: "Open CASCADE Technology Public License",
            definition: Some("Open CASCADE Technology Public License."),
        },
        Concept {
            value: SPDXLicense::Oclc20,
            code: "OCLC-2.0",
            display: "OCLC Research Public License 2.0",
            definition: Some("OCLC Research Public License 2.0."),
        },
        Concept {
            value: SPDXLicense::Odbl10,
            code: "ODbL-1.0",
            display: "ODC Open Database License v1.0",
            definition: Some("ODC Open Database License v1.0."),
        },
        Concept {
            value: SPDXLicense::Ofl10,
            code: "OFL-1.0",
            display: "SIL Open Font License 1.0",
            definition: Some("SIL Open Font License 1.0."),
        },
        Concept {
            value: SPDXLicense::Ofl11,
            code: "OFL-1.1",
            display: "SIL Open Font License 1.1",
            definition: Some("SIL Open Font License 1.1."),
        },
        Concept {
            value: SPDXLicense::Ogtsl,
            code: "OGTSL",
            display: "Open Group Test Suite License",
            definition: Some("Open Group Test Suite License."),
        },
        Concept {
            value: SPDXLicense::Oldap11,
            code: "OLDAP-1.1",
            display: "Open LDAP Public License v1.1",
            definition: Some("Open LDAP Public License v1.1."),
        },
        Concept {
            value: SPDXLicense::Oldap12,
            code: "OLDAP-1.2",
            display: "Open LDAP Public License v1.2",
            definition: Some("Open LDAP Public License v1.2."),
        },
        Concept {
            value: SPDXLicense::Oldap13,
            code: "OLDAP-1.3",
            display: "Open LDAP Public License v1.3",
            definition: Some("Open LDAP Public License v1.3."),
        },
        Concept {
            value: SPDXLicense::Oldap14,
            code: "OLDAP-1.4",
            display: "Open LDAP Public License v1.4",
            definition: Some("Open LDAP Public License v1.4."),
        },
        Concept {
            value: SPDXLicense::Oldap201,
            code: "OLDAP-2.0.1",
            display: "Open LDAP Public License v2.0.1",
            definition: Some("Open LDAP Public License v2.0.1."),
        },
        Concept {
            value: SPDXLicense::Oldap20,
            code: "OLDAP-2.0",
            display: "Open LDAP Public License v2.0 (or possibly 2.0A and 2.0B)",
            definition: Some(
                "Open LDAP Public License v2.0 (or possibly 2.0A and 2.0B).",
            ),
        },
        Concept {
            value: SPDXLicense::Oldap21,
            code: "OLDAP-2.1",
            display: "Open LDAP Public License v2.1",
            definition: Some("Open LDAP Public License v2.1."),
        },
        Concept {
            value: SPDXLicense::Oldap221,
            code: "OLDAP-2.2.1",
            display: "Open LDAP Public License v2.2.1",
            definition: Some("Open LDAP Public License v2.2.1."),
        },
        Concept {
            value: SPDXLicense::Oldap222,
            code: "OLDAP-2.2.2",
            display: "Open LDAP Public License 2.2.2",
            definition: Some("Open LDAP Public License 2.2.2."),
        },
        Concept {
            value: SPDXLicense::Oldap22,
            code: "OLDAP-2.2",
            display: "Open LDAP Public License v2.2",
            definition: Some("Open LDAP Public License v2.2."),
        },
        Concept {
            value: SPDXLicense::Oldap23,
            code: "OLDAP-2.3",
            display: "Open LDAP Public License v2.3",
            definition: Some("Open LDAP Public License v2.3."),
        },
        Concept {
            value: SPDXLicense::Oldap24,
            code: "OLDAP-2.4",
            display: "Open LDAP Public License v2.4",
            definition: Some("Open LDAP Public License v2.4."),
        },
        Concept {
            value: SPDXLicense::Oldap25,
            code: "OLDAP-2.5",
            display: "Open LDAP Public License v2.5",
            definition: Some("Open LDAP Public License v2.5."),
        },
        Concept {
            value: SPDXLicense::Oldap26,
            code: "OLDAP-2.6",
            display: "Open LDAP Public License v2.6",
            definition: Some("Open LDAP Public License v2.6."),
        },
        Concept {
            value: SPDXLicense::Oldap27,
            code: "OLDAP-2.7",
            display: "Open LDAP Public License v2.7",
            definition: Some("Open LDAP Public License v2.7."),
        },
        Concept {
            value: SPDXLicense::Oldap28,
            code: "OLDAP-2.8",
            display: "Open LDAP Public License v2.8",
            definition: Some("Open LDAP Public License v2.8."),
        },
        Concept {
            value: SPDXLicense::Oml,
            code: "OML",
            display: "Open Market License",
            definition: Some("Open Market License."),
        },
        Concept {
            value: SPDXLicense::Openssl,
            code: "OpenSSL",
            display: "OpenSSL License",
            definition: Some("OpenSSL License."),
        },
        Concept {
            value: SPDXLicense::Opl10,
            code: "OPL-1.0",
            display: "Open Public License v1.0",
            definition: Some("Open Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::OsetPl21,
            code: "OSET-PL-2.1",
            display: "OSET Public License version 2.1",
            definition: Some("OSET Public License version 2.1."),
        },
        Concept {
            value: SPDXLicense::Osl10,
            code: "OSL-1.0",
            display: "Open Software License 1.0",
            definition: Some("Open Software License 1.0."),
        },
        Concept {
            value: SPDXLicense::Osl11,
            code: "OSL-1.1",
            display: "Open Software License 1.1",
            definition: Some("Open Software License 1.1."),
        },
        Concept {
            value: SPDXLicense::Osl20,
            code: "OSL-2.0",
            display: "Open Software License 2.0",
            definition: Some("Open Software License 2.0."),
        },
        Concept {
            value: SPDXLicense::Osl21,
            code: "OSL-2.1",
            display: "Open Software License 2.1",
            definition: Some("Open Software License 2.1."),
        },
        Concept {
            value: SPDXLicense::Osl30,
            code: "OSL-3.0",
            display: "Open Software License 3.0",
            definition: Some("Open Software License 3.0."),
        },
        Concept {
            value: SPDXLicense::Pddl10,
            code: "PDDL-1.0",
            display: "ODC Public Domain Dedication & License 1.0",
            definition: Some("ODC Public Domain Dedication & License 1.0."),
        },
        Concept {
            value: SPDXLicense::Php30,
            code: "PHP-3.0",
            display: "PHP License v3.0",
            definition: Some("PHP License v3.0."),
        },
        Concept {
            value: SPDXLicense::Php301,
            code: "PHP-3.01",
            display: "PHP License v3.01",
            definition: Some("PHP License v3.01."),
        },
        Concept {
            value: SPDXLicense::Plexus,
            code: "Plexus",
            display: "Plexus Classworlds License",
            definition: Some("Plexus Classworlds License."),
        },
        Concept {
            value: SPDXLicense::Postgresql,
            code: "PostgreSQL",
            display: "PostgreSQL License",
            definition: Some("PostgreSQL License."),
        },
        Concept {
            value: SPDXLicense::Psfrag,
            code: "psfrag",
            display: "psfrag License",
            definition: Some("psfrag License."),
        },
        Concept {
            value: SPDXLicense::Psutils,
            code: "psutils",
            display: "psutils License",
            definition: Some("psutils License."),
        },
        Concept {
            value: SPDXLicense::Python20,
            code: "Python-2.0",
            display: "Python License 2.0",
            definition: Some("Python License 2.0."),
        },
        Concept {
            value: SPDXLicense::Qhull,
            code: "Qhull",
            display: "Qhull License",
            definition: Some("Qhull License."),
        },
        Concept {
            value: SPDXLicense::Qpl10,
            code: "QPL-1.0",
            display: "Q Public License 1.0",
            definition: Some("Q Public License 1.0."),
        },
        Concept {
            value: SPDXLicense::Rdisc,
            code: "Rdisc",
            display: "Rdisc License",
            definition: Some("Rdisc License."),
        },
        Concept {
            value: SPDXLicense::Rhecos11,
            code: "RHeCos-1.1",
            display: "Red Hat eCos Public License v1.1",
            definition: Some("Red Hat eCos Public License v1.1."),
        },
        Concept {
            value: SPDXLicense::Rpl11,
            code: "RPL-1.1",
            display: "Reciprocal Public License 1.1",
            definition: Some("Reciprocal Public License 1.1."),
        },
        Concept {
            value: SPDXLicense::Rpl15,
            code: "RPL-1.5",
            display: "Reciprocal Public License 1.5",
            definition: Some("Reciprocal Public License 1.5."),
        },
        Concept {
            value: SPDXLicense::Rpsl10,
            code: "RPSL-1.0",
            display: "RealNetworks Public Source License v1.0",
            definition: Some("RealNetworks Public Source License v1.0."),
        },
        Concept {
            value: SPDXLicense::RsaMd,
            code: "RSA-MD",
            display: "RSA Message-Digest License",
            definition: Some("RSA Message-Digest License."),
        },
        Concept {
            value: SPDXLicense::Rscpl,
            code: "RSCPL",
            display: "Ricoh Source Code Public License",
            definition: Some("Ricoh Source Code Public License."),
        },
        Concept {
            value: SPDXLicense::Ruby,
            code: "Ruby",
            display: "Ruby License",
            definition: Some("Ruby License."),
        },
        Concept {
            value: SPDXLicense::SaxPd,
            code: "SAX-PD",
            display: "Sax Public Domain Notice",
            definition: Some("Sax Public Domain Notice."),
        },
        Concept {
            value: SPDXLicense::Saxpath,
            code: "Saxpath",
            display: "Saxpath License",
            definition: Some("Saxpath License."),
        },
        Concept {
            value: SPDXLicense::Scea,
            code: "SCEA",
            display: "SCEA Shared Source License",
            definition: Some("SCEA Shared Source License."),
        },
        Concept {
            value: SPDXLicense::Sendmail,
            code: "Sendmail",
            display: "Sendmail License",
            definition: Some("Sendmail License."),
        },
        Concept {
            value: SPDXLicense::SgiB10,
            code: "SGI-B-1.0",
            display: "SGI Free Software License B v1.0",
            definition: Some("SGI Free Software License B v1.0."),
        },
        Concept {
            value: SPDXLicense::SgiB11,
            code: "SGI-B-1.1",
            display: "SGI Free Software License B v1.1",
            definition: Some("SGI Free Software License B v1.1."),
        },
        Concept {
            value: SPDXLicense::SgiB20,
            code: "SGI-B-2.0",
            display: "SGI Free Software License B v2.0",
            definition: Some("SGI Free Software License B v2.0."),
        },
        Concept {
            value: SPDXLicense::Simpl20,
            code: "SimPL-2.0",
            display: "Simple Public License 2.0",
            definition: Some("Simple Public License 2.0."),
        },
        Concept {
            value: SPDXLicense::Sissl12,
            code: "SISSL-1.2",
            display: "Sun Industry Standards Source License v1.2",
            definition: Some("Sun Industry Standards Source License v1.2."),
        },
        Concept {
            value: SPDXLicense::Sissl,
            code: "SISSL",
            display: "Sun Industry Standards Source License v1.1",
            definition: Some("Sun Industry Standards Source License v1.1."),
        },
        Concept {
            value: SPDXLicense::Sleepycat,
            code: "Sleepycat",
            display: "Sleepycat License",
            definition: Some("Sleepycat License."),
        },
        Concept {
            value: SPDXLicense::Smlnj,
            code: "SMLNJ",
            display: "Standard ML of New Jersey License",
            definition: Some("Standard ML of New Jersey License."),
        },
        Concept {
            value: SPDXLicense::Smppl,
            code: "SMPPL",
            display: "Secure Messaging Protocol Public License",
            definition: Some("Secure Messaging Protocol Public License."),
        },
        Concept {
            value: SPDXLicense::Snia,
            code: "SNIA",
            display: "SNIA Public License 1.1",
            definition: Some("SNIA Public License 1.1."),
        },
        Concept {
            value: SPDXLicense::Spencer86,
            code: "Spencer-86",
            display: "Spencer License 86",
            definition: Some("Spencer License 86."),
        },
        Concept {
            value: SPDXLicense::Spencer94,
            code: "Spencer-94",
            display: "Spencer License 94",
            definition: Some("Spencer License 94."),
        },
        Concept {
            value: SPDXLicense::Spencer99,
            code: "Spencer-99",
            display: "Spencer License 99",
            definition: Some("Spencer License 99."),
        },
        Concept {
            value: SPDXLicense::Spl10,
            code: "SPL-1.0",
            display: "Sun Public License v1.0",
            definition: Some("Sun Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Sugarcrm113,
            code: "SugarCRM-1.1.3",
            display: "SugarCRM Public License v1.1.3",
            definition: Some("SugarCRM Public License v1.1.3."),
        },
        Concept {
            value: SPDXLicense::Swl,
            code: "SWL",
            display: "Scheme Widget Library (SWL) Software License Agreement",
            definition: Some("Scheme Widget Library (SWL) Software License Agreement."),
        },
        Concept {
            value: SPDXLicense::Tcl,
            code: "TCL",
            display: "TCL/TK License",
            definition: Some("TCL/TK License."),
        },
        Concept {
            value: SPDXLicense::TcpWrappers,
            code: "TCP-wrappers",
            display: "TCP Wrappers License",
            definition: Some("TCP Wrappers License."),
        },
        Concept {
            value: SPDXLicense::Tmate,
            code: "TMate",
            display: "TMate Open Source License",
            definition: Some("TMate Open Source License."),
        },
        Concept {
            value: SPDXLicense::Torque11,
            code: "TORQUE-1.1",
            display: "TORQUE v2.5+ Software License v1.1",
            definition: Some("TORQUE v2.5+ Software License v1.1."),
        },
        Concept {
            value: SPDXLicense::Tosl,
            code: "TOSL",
            display: "Trusster Open Source License",
            definition: Some("Trusster Open Source License."),
        },
        Concept {
            value: SPDXLicense::UnicodeDfs2015,
            code: "Unicode-DFS-2015",
            display: "Unicode License Agreement - Data Files and Software (2015)",
            definition: Some(
                "Unicode License Agreement - Data Files and Software (2015).",
            ),
        },
        Concept {
            value: SPDXLicense::UnicodeDfs2016,
            code: "Unicode-DFS-2016",
            display: "Unicode License Agreement - Data Files and Software (2016)",
            definition: Some(
                "Unicode License Agreement - Data Files and Software (2016).",
            ),
        },
        Concept {
            value: SPDXLicense::UnicodeTou,
            code: "Unicode-TOU",
            display: "Unicode Terms of Use",
            definition: Some("Unicode Terms of Use."),
        },
        Concept {
            value: SPDXLicense::Unlicense,
            code: "Unlicense",
            display: "The Unlicense",
            definition: Some("The Unlicense."),
        },
        Concept {
            value: SPDXLicense::Upl10,
            code: "UPL-1.0",
            display: "Universal Permissive License v1.0",
            definition: Some("Universal Permissive License v1.0."),
        },
        Concept {
            value: SPDXLicense::Vim,
            code: "Vim",
            display: "Vim License",
            definition: Some("Vim License."),
        },
        Concept {
            value: SPDXLicense::Vostrom,
            code: "VOSTROM",
            display: "VOSTROM Public License for Open Source",
            definition: Some("VOSTROM Public License for Open Source."),
        },
        Concept {
            value: SPDXLicense::Vsl10,
            code: "VSL-1.0",
            display: "Vovida Software License v1.0",
            definition: Some("Vovida Software License v1.0."),
        },
        Concept {
            value: SPDXLicense::W3c19980720,
            code: "W3C-19980720",
            display: "W3C Software Notice and License (1998-07-20)",
            definition: Some("W3C Software Notice and License (1998-07-20)."),
        },
        Concept {
            value: SPDXLicense::W3c20150513,
            code: "W3C-20150513",
            display: "W3C Software Notice and Document License (2015-05-13)",
            definition: Some("W3C Software Notice and Document License (2015-05-13)."),
        },
        Concept {
            value: SPDXLicense::W3c,
            code: "W3C",
            display: "W3C Software Notice and License (2002-12-31)",
            definition: Some("W3C Software Notice and License (2002-12-31)."),
        },
        Concept {
            value: SPDXLicense::Watcom10,
            code: "Watcom-1.0",
            display: "Sybase Open Watcom Public License 1.0",
            definition: Some("Sybase Open Watcom Public License 1.0."),
        },
        Concept {
            value: SPDXLicense::Wsuipa,
            code: "Wsuipa",
            display: "Wsuipa License",
            definition: Some("Wsuipa License."),
        },
        Concept {
            value: SPDXLicense::Wtfpl,
            code: "WTFPL",
            display: "Do What The F*ck You Want To Public License",
            definition: Some("Do What The F*ck You Want To Public License."),
        },
        Concept {
            value: SPDXLicense::X11,
            code: "X11",
            display: "X11 License",
            definition: Some("X11 License."),
        },
        Concept {
            value: SPDXLicense::Xerox,
            code: "Xerox",
            display: "Xerox License",
            definition: Some("Xerox License."),
        },
        Concept {
            value: SPDXLicense::Xfree8611,
            code: "XFree86-1.1",
            display: "XFree86 License 1.1",
            definition: Some("XFree86 License 1.1."),
        },
        Concept {
            value: SPDXLicense::Xinetd,
            code: "xinetd",
            display: "xinetd License",
            definition: Some("xinetd License."),
        },
        Concept {
            value: SPDXLicense::Xnet,
            code: "Xnet",
            display: "X.Net License",
            definition: Some("X.Net License."),
        },
        Concept {
            value: SPDXLicense::Xpp,
            code: "xpp",
            display: "XPP License",
            definition: Some("XPP License."),
        },
        Concept {
            value: SPDXLicense::Xskat,
            code: "XSkat",
            display: "XSkat License",
            definition: Some("XSkat License."),
        },
        Concept {
            value: SPDXLicense::Ypl10,
            code: "YPL-1.0",
            display: "Yahoo! Public License v1.0",
            definition: Some("Yahoo! Public License v1.0."),
        },
        Concept {
            value: SPDXLicense::Ypl11,
            code: "YPL-1.1",
            display: "Yahoo! Public License v1.1",
            definition: Some("Yahoo! Public License v1.1."),
        },
        Concept {
            value: SPDXLicense::Zed,
            code: "Zed",
            display: "Zed License",
            definition: Some("Zed License."),
        },
        Concept {
            value: SPDXLicense::Zend20,
            code: "Zend-2.0",
            display: "Zend License v2.0",
            definition: Some("Zend License v2.0."),
        },
        Concept {
            value: SPDXLicense::Zimbra13,
            code: "Zimbra-1.3",
            display: "Zimbra Public License v1.3",
            definition: Some("Zimbra Public License v1.3."),
        },
        Concept {
            value: SPDXLicense::Zimbra14,
            code: "Zimbra-1.4",
            display: "Zimbra Public License v1.4",
            definition: Some("Zimbra Public License v1.4."),
        },
        Concept {
            value: SPDXLicense::ZlibAcknowledgement,
            code: "zlib-acknowledgement",
            display: "zlib/libpng License with Acknowledgement",
            definition: Some("zlib/libpng License with Acknowledgement."),
        },
        Concept {
            value: SPDXLicense::Zlib,
            code: "Zlib",
            display: "zlib License",
            definition: Some("zlib License."),
        },
        Concept {
            value: SPDXLicense::Zpl11,
            code: "ZPL-1.1",
            display: "Zope Public License 1.1",
            definition: Some("Zope Public License 1.1."),
        },
        Concept {
            value: SPDXLicense::Zpl20,
            code: "ZPL-2.0",
            display: "Zope Public License 2.0",
            definition: Some("Zope Public License 2.0."),
        },
        Concept {
            value: SPDXLicense::Zpl21,
            code: "ZPL-2.1",
            display: "Zope Public License 2.1",
            definition: Some("Zope Public License 2.1."),
        },
    ];
}
impl CodeSystem for SPDXLicense {
    const URL: &'static str = "http://hl7.org/fhir/spdx-license";
    const NAME: &'static str = "SPDXLicense";
    const VERSION: Option<&'static str> = Some("4.0.1");
    fn concepts() -> &'static [Concept<Self>] {
        Self::CONCEPTS
    }
    fn concept(&self) -> &'static Concept<Self> {
        &Self::CONCEPTS[*self as usize]
    }
    fn as_code(&self) -> &'static str {
        match self {
            SPDXLicense::NotOpenSource => "not-open-source",
            SPDXLicense::N0bsd => "0BSD",
            SPDXLicense::Aal => "AAL",
            SPDXLicense::Abstyles => "Abstyles",
            SPDXLicense::Adobe2006 => "Adobe-2006",
            SPDXLicense::AdobeGlyph => "Adobe-Glyph",
            SPDXLicense::Adsl => "ADSL",
            SPDXLicense::Afl11 => "AFL-1.1",
            SPDXLicense::Afl12 => "AFL-1.2",
            SPDXLicense::Afl20 => "AFL-2.0",
            SPDXLicense::Afl21 => "AFL-2.1",
            SPDXLicense::Afl30 => "AFL-3.0",
            SPDXLicense::Afmparse => "Afmparse",
            SPDXLicense::Agpl10Only => "AGPL-1.0-only",
            SPDXLicense::Agpl10OrLater => "AGPL-1.0-or-later",
            SPDXLicense::Agpl30Only => "AGPL-3.0-only",
            SPDXLicense::Agpl30OrLater => "AGPL-3.0-or-later",
            SPDXLicense::Aladdin => "Aladdin",
            SPDXLicense::Amdplpa => "AMDPLPA",
            SPDXLicense::Aml => "AML",
            SPDXLicense::Ampas => "AMPAS",
            SPDXLicense::AntlrPd => "ANTLR-PD",
            SPDXLicense::Apache10 => "Apache-1.0",
            SPDXLicense::Apache11 => "Apache-1.1",
            SPDXLicense::Apache20 => "Apache-2.0",
            SPDXLicense::Apafml => "APAFML",
            SPDXLicense::Apl10 => "APL-1.0",
            SPDXLicense::Apsl10 => "APSL-1.0",
            SPDXLicense::Apsl11 => "APSL-1.1",
            SPDXLicense::Apsl12 => "APSL-1.2",
            SPDXLicense::Apsl20 => "APSL-2.0",
            SPDXLicense::Artistic10Cl8 => "Artistic-1.0-cl8",
            SPDXLicense::Artistic10Perl => "Artistic-1.0-Perl",
            SPDXLicense::Artistic10 => "Artistic-1.0",
            SPDXLicense::Artistic20 => "Artistic-2.0",
            SPDXLicense::Bahyph => "Bahyph",
            SPDXLicense::Barr => "Barr",
            SPDXLicense::Beerware => "Beerware",
            SPDXLicense::Bittorrent10 => "BitTorrent-1.0",
            SPDXLicense::Bittorrent11 => "BitTorrent-1.1",
            SPDXLicense::Borceux => "Borceux",
            SPDXLicense::Bsd1Clause => "BSD-1-Clause",
            SPDXLicense::Bsd2ClauseFreebsd => "BSD-2-Clause-FreeBSD",
            SPDXLicense::Bsd2ClauseNetbsd => "BSD-2-Clause-NetBSD",
            SPDXLicense::Bsd2ClausePatent => "BSD-2-Clause-Patent",
            SPDXLicense::Bsd2Clause => "BSD-2-Clause",
            SPDXLicense::Bsd3ClauseAttribution => "BSD-3-Clause-Attribution",
            SPDXLicense::Bsd3ClauseClear => "BSD-3-Clause-Clear",
            SPDXLicense::Bsd3ClauseLbnl => "BSD-3-Clause-LBNL",
            SPDXLicense::Bsd3ClauseNoNuclearLicense2014 => {
                "BSD-3-Clause-No-Nuclear-License-2014"
            }
            SPDXLicense::Bsd3ClauseNoNuclearLicense => "BSD-3-Clause-No-Nuclear-License",
            SPDXLicense::Bsd3ClauseNoNuclearWarranty => {
                "BSD-3-Clause-No-Nuclear-Warranty"
            }
            SPDXLicense::Bsd3Clause => "BSD-3-Clause",
            SPDXLicense::Bsd4ClauseUc => "BSD-4-Clause-UC",
            SPDXLicense::Bsd4Clause => "BSD-4-Clause",
            SPDXLicense::BsdProtection => "BSD-Protection",
            SPDXLicense::BsdSourceCode => "BSD-Source-Code",
            SPDXLicense::Bsl10 => "BSL-1.0",
            SPDXLicense::Bzip2105 => "bzip2-1.0.5",
            SPDXLicense::Bzip2106 => "bzip2-1.0.6",
            SPDXLicense::Caldera => "Caldera",
            SPDXLicense::Catosl11 => "CATOSL-1.1",
            SPDXLicense::CcBy10 => "CC-BY-1.0",
            SPDXLicense::CcBy20 => "CC-BY-2.0",
            SPDXLicense::CcBy25 => "CC-BY-2.5",
            SPDXLicense::CcBy30 => "CC-BY-3.0",
            SPDXLicense::CcBy40 => "CC-BY-4.0",
            SPDXLicense::CcByNc10 => "CC-BY-NC-1.0",
            SPDXLicense::CcByNc20 => "CC-BY-NC-2.0",
            SPDXLicense::CcByNc25 => "CC-BY-NC-2.5",
            SPDXLicense::CcByNc30 => "CC-BY-NC-3.0",
            SPDXLicense::CcByNc40 => "CC-BY-NC-4.0",
            SPDXLicense::CcByNcNd10 => "CC-BY-NC-ND-1.0",
            SPDXLicense::CcByNcNd20 => "CC-BY-NC-ND-2.0",
            SPDXLicense::CcByNcNd25 => "CC-BY-NC-ND-2.5",
            SPDXLicense::CcByNcNd30 => "CC-BY-NC-ND-3.0",
            SPDXLicense::CcByNcNd40 => "CC-BY-NC-ND-4.0",
            SPDXLicense::CcByNcSa10 => "CC-BY-NC-SA-1.0",
            SPDXLicense::CcByNcSa20 => "CC-BY-NC-SA-2.0",
            SPDXLicense::CcByNcSa25 => "CC-BY-NC-SA-2.5",
            SPDXLicense::CcByNcSa30 => "CC-BY-NC-SA-3.0",
            SPDXLicense::CcByNcSa40 => "CC-BY-NC-SA-4.0",
            SPDXLicense::CcByNd10 => "CC-BY-ND-1.0",
            SPDXLicense::CcByNd20 => "CC-BY-ND-2.0",
            SPDXLicense::CcByNd25 => "CC-BY-ND-2.5",
            SPDXLicense::CcByNd30 => "CC-BY-ND-3.0",
            SPDXLicense::CcByNd40 => "CC-BY-ND-4.0",
            SPDXLicense::CcBySa10 => "CC-BY-SA-1.0",
            SPDXLicense::CcBySa20 => "CC-BY-SA-2.0",
            SPDXLicense::CcBySa25 => "CC-BY-SA-2.5",
            SPDXLicense::CcBySa30 => "CC-BY-SA-3.0",
            SPDXLicense::CcBySa40 => "CC-BY-SA-4.0",
            SPDXLicense::Cc010 => "CC0-1.0",
            SPDXLicense::Cddl10 => "CDDL-1.0",
            SPDXLicense::Cddl11 => "CDDL-1.1",
            SPDXLicense::CdlaPermissive10 => "CDLA-Permissive-1.0",
            SPDXLicense::CdlaSharing10 => "CDLA-Sharing-1.0",
            SPDXLicense::Cecill10 => "CECILL-1.0",
            SPDXLicense::Cecill11 => "CECILL-1.1",
            SPDXLicense::Cecill20 => "CECILL-2.0",
            SPDXLicense::Cecill21 => "CECILL-2.1",
            SPDXLicense::CecillB => "CECILL-B",
            SPDXLicense::CecillC => "CECILL-C",
            SPDXLicense::Clartistic => "ClArtistic",
            SPDXLicense::CnriJython => "CNRI-Jython",
            SPDXLicense::CnriPythonGplCompatible => "CNRI-Python-GPL-Compatible",
            SPDXLicense::CnriPython => "CNRI-Python",
            SPDXLicense::Condor11 => "Condor-1.1",
            SPDXLicense::Cpal10 => "CPAL-1.0",
            SPDXLicense::Cpl10 => "CPL-1.0",
            SPDXLicense::Cpol102 => "CPOL-1.02",
            SPDXLicense::Crossword => "Crossword",
            SPDXLicense::Crystalstacker => "CrystalStacker",
            SPDXLicense::CuaOpl10 => "CUA-OPL-1.0",
            SPDXLicense::Cube => "Cube",
            SPDXLicense::Curl => "curl",
            SPDXLicense::DFsl10 => "D-FSL-1.0",
            SPDXLicense::Diffmark => "diffmark",
            SPDXLicense::Doc => "DOC",
            SPDXLicense::Dotseqn => "Dotseqn",
            SPDXLicense::Dsdp => "DSDP",
            SPDXLicense::Dvipdfm => "dvipdfm",
            SPDXLicense::Ecl10 => "ECL-1.0",
            SPDXLicense::Ecl20 => "ECL-2.0",
            SPDXLicense::Efl10 => "EFL-1.0",
            SPDXLicense::Efl20 => "EFL-2.0",
            SPDXLicense::Egenix => "eGenix",
            SPDXLicense::Entessa => "Entessa",
            SPDXLicense::Epl10 => "EPL-1.0",
            SPDXLicense::Epl20 => "EPL-2.0",
            SPDXLicense::Erlpl11 => "ErlPL-1.1",
            SPDXLicense::Eudatagrid => "EUDatagrid",
            SPDXLicense::Eupl10 => "EUPL-1.0",
            SPDXLicense::Eupl11 => "EUPL-1.1",
            SPDXLicense::Eupl12 => "EUPL-1.2",
            SPDXLicense::Eurosym => "Eurosym",
            SPDXLicense::Fair => "Fair",
            SPDXLicense::Frameworx10 => "Frameworx-1.0",
            SPDXLicense::Freeimage => "FreeImage",
            SPDXLicense::Fsfap => "FSFAP",
            SPDXLicense::Fsful => "FSFUL",
            SPDXLicense::Fsfullr => "FSFULLR",
            SPDXLicense::Ftl => "FTL",
            SPDXLicense::Gfdl11Only => "GFDL-1.1-only",
            SPDXLicense::Gfdl11OrLater => "GFDL-1.1-or-later",
            SPDXLicense::Gfdl12Only => "GFDL-1.2-only",
            SPDXLicense::Gfdl12OrLater => "GFDL-1.2-or-later",
            SPDXLicense::Gfdl13Only => "GFDL-1.3-only",
            SPDXLicense::Gfdl13OrLater => "GFDL-1.3-or-later",
            SPDXLicense::Giftware => "Giftware",
            SPDXLicense::Gl2ps => "GL2PS",
            SPDXLicense::Glide => "Glide",
            SPDXLicense::Glulxe => "Glulxe",
            SPDXLicense::Gnuplot => "gnuplot",
            SPDXLicense::Gpl10Only => "GPL-1.0-only",
            SPDXLicense::Gpl10OrLater => "GPL-1.0-or-later",
            SPDXLicense::Gpl20Only => "GPL-2.0-only",
            SPDXLicense::Gpl20OrLater => "GPL-2.0-or-later",
            SPDXLicense::Gpl30Only => "GPL-3.0-only",
            SPDXLicense::Gpl30OrLater => "GPL-3.0-or-later",
            SPDXLicense::Gsoap13b => "gSOAP-1.3b",
            SPDXLicense::Haskellreport => "HaskellReport",
            SPDXLicense::Hpnd => "HPND",
            SPDXLicense::IbmPibs => "IBM-pibs",
            SPDXLicense::Icu => "ICU",
            SPDXLicense::Ijg => "IJG",
            SPDXLicense::Imagemagick => "ImageMagick",
            SPDXLicense::Imatix => "iMatix",
            SPDXLicense::Imlib2 => "Imlib2",
            SPDXLicense::InfoZip => "Info-ZIP",
            SPDXLicense::IntelAcpi => "Intel-ACPI",
            SPDXLicense::Intel => "Intel",
            SPDXLicense::Interbase10 => "Interbase-1.0",
            SPDXLicense::Ipa => "IPA",
            SPDXLicense::Ipl10 => "IPL-1.0",
            SPDXLicense::Isc => "ISC",
            SPDXLicense::Jasper20 => "JasPer-2.0",
            SPDXLicense::Json => "JSON",
            SPDXLicense::Lal12 => "LAL-1.2",
            SPDXLicense::Lal13 => "LAL-1.3",
            SPDXLicense::Latex2e => "Latex2e",
            SPDXLicense::Leptonica => "Leptonica",
            SPDXLicense::Lgpl20Only => "LGPL-2.0-only",
            SPDXLicense::Lgpl20OrLater => "LGPL-2.0-or-later",
            SPDXLicense::Lgpl21Only => "LGPL-2.1-only",
            SPDXLicense::Lgpl21OrLater => "LGPL-2.1-or-later",
            SPDXLicense::Lgpl30Only => "LGPL-3.0-only",
            SPDXLicense::Lgpl30OrLater => "LGPL-3.0-or-later",
            SPDXLicense::Lgpllr => "LGPLLR",
            SPDXLicense::Libpng => "Libpng",
            SPDXLicense::Libtiff => "libtiff",
            SPDXLicense::LiliqP11 => "LiLiQ-P-1.1",
            SPDXLicense::LiliqR11 => "LiLiQ-R-1.1",
            SPDXLicense::LiliqRplus11 => "LiLiQ-Rplus-1.1",
            SPDXLicense::LinuxOpenib => "Linux-OpenIB",
            SPDXLicense::Lpl10 => "LPL-1.0",
            SPDXLicense::Lpl102 => "LPL-1.02",
            SPDXLicense::Lppl10 => "LPPL-1.0",
            SPDXLicense::Lppl11 => "LPPL-1.1",
            SPDXLicense::Lppl12 => "LPPL-1.2",
            SPDXLicense::Lppl13a => "LPPL-1.3a",
            SPDXLicense::Lppl13c => "LPPL-1.3c",
            SPDXLicense::Makeindex => "MakeIndex",
            SPDXLicense::Miros => "MirOS",
            SPDXLicense::Mit0 => "MIT-0",
            SPDXLicense::MitAdvertising => "MIT-advertising",
            SPDXLicense::MitCmu => "MIT-CMU",
            SPDXLicense::MitEnna => "MIT-enna",
            SPDXLicense::MitFeh => "MIT-feh",
            SPDXLicense::Mit => "MIT",
            SPDXLicense::Mitnfa => "MITNFA",
            SPDXLicense::Motosoto => "Motosoto",
            SPDXLicense::Mpich2 => "mpich2",
            SPDXLicense::Mpl10 => "MPL-1.0",
            SPDXLicense::Mpl11 => "MPL-1.1",
            SPDXLicense::Mpl20NoCopyleftException => "MPL-2.0-no-copyleft-exception",
            SPDXLicense::Mpl20 => "MPL-2.0",
            SPDXLicense::MsPl => "MS-PL",
            SPDXLicense::MsRl => "MS-RL",
            SPDXLicense::Mtll => "MTLL",
            SPDXLicense::Multics => "Multics",
            SPDXLicense::Mup => "Mup",
            SPDXLicense::Nasa13 => "NASA-1.3",
            SPDXLicense::Naumen => "Naumen",
            SPDXLicense::Nbpl10 => "NBPL-1.0",
            SPDXLicense::Ncsa => "NCSA",
            SPDXLicense::NetSnmp => "Net-SNMP",
            SPDXLicense::Netcdf => "NetCDF",
            SPDXLicense::Newsletr => "Newsletr",
            SPDXLicense::Ngpl => "NGPL",
            SPDXLicense::Nlod10 => "NLOD-1.0",
            SPDXLicense::Nlpl => "NLPL",
            SPDXLicense::Nokia => "Nokia",
            SPDXLicense::Nosl => "NOSL",
            SPDXLicense::Noweb => "Noweb",
            SPDXLicense::Npl10 => "NPL-1.0",
            SPDXLicense::Npl11 => "NPL-1.1",
            SPDXLicense::Nposl30 => "NPOSL-3.0",
            SPDXLicense::Nrl => "NRL",
            SPDXLicense::Ntp => "NTP",
            SPDXLicense::OcctPl => "OCCT-PL",
            SPDXLicense::Oclc20 => "OCLC-2.0",
            SPDXLicense::Odbl10 => "ODbL-1.0",
            SPDXLicense::Ofl10 => "OFL-1.0",
            SPDXLicense::Ofl11 => "OFL-1.1",
            SPDXLicense::Ogtsl => "OGTSL",
            SPDXLicense::Oldap11 => "OLDAP-1.1",
            SPDXLicense::Oldap12 => "OLDAP-1.2",
            SPDXLicense::Oldap13 => "OLDAP-1.3",
            SPDXLicense::Oldap14 => "OLDAP-1.4",
            SPDXLicense::Oldap201 => "OLDAP-2.0.1",
            SPDXLicense::Oldap20 => "OLDAP-2.0",
            SPDXLicense::Oldap21 => "OLDAP-2.1",
            SPDXLicense::Oldap221 => "OLDAP-2.2.1",
            SPDXLicense::Oldap222 => "OLDAP-2.2.2",
            SPDXLicense::Oldap22 => "OLDAP-2.2",
            SPDXLicense::Oldap23 => "OLDAP-2.3",
            SPDXLicense::Oldap24 => "OLDAP-2.4",
            SPDXLicense::Oldap25 => "OLDAP-2.5",
            SPDXLicense::Oldap26 => "OLDAP-2.6",
            SPDXLicense::Oldap27 => "OLDAP-2.7",
            SPDXLicense::Oldap28 => "OLDAP-2.8",
            SPDXLicense::Oml => "OML",
            SPDXLicense::Openssl => "OpenSSL",
            SPDXLicense::Opl10 => "OPL-1.0",
            SPDXLicense::OsetPl21 => "OSET-PL-2.1",
            SPDXLicense::Osl10 => "OSL-1.0",
            SPDXLicense::Osl11 => "OSL-1.1",
            SPDXLicense::Osl20 => "OSL-2.0",
            SPDXLicense::Osl21 => "OSL-2.1",
            SPDXLicense::Osl30 => "OSL-3.0",
            SPDXLicense::Pddl10 => "PDDL-1.0",
            SPDXLicense::Php30 => "PHP-3.0",
            SPDXLicense::Php301 => "PHP-3.01",
            SPDXLicense::Plexus => "Plexus",
            SPDXLicense::Postgresql => "PostgreSQL",
            SPDXLicense::Psfrag => "psfrag",
            SPDXLicense::Psutils => "psutils",
            SPDXLicense::Python20 => "Python-2.0",
            SPDXLicense::Qhull => "Qhull",
            SPDXLicense::Qpl10 => "QPL-1.0",
            SPDXLicense::Rdisc => "Rdisc",
            SPDXLicense::Rhecos11 => "RHeCos-1.1",
            SPDXLicense::Rpl11 => "RPL-1.1",
            SPDXLicense::Rpl15 => "RPL-1.5",
            SPDXLicense::Rpsl10 => "RPSL-1.0",
            SPDXLicense::RsaMd => "RSA-MD",
            SPDXLicense::Rscpl => "RSCPL",
            SPDXLicense::Ruby => "Ruby",
            SPDXLicense::SaxPd => "SAX-PD",
            SPDXLicense::Saxpath => "Saxpath",
            SPDXLicense::Scea => "SCEA",
            SPDXLicense::Sendmail => "Sendmail",
            SPDXLicense::SgiB10 => "SGI-B-1.0",
            SPDXLicense::SgiB11 => "SGI-B-1.1",
            SPDXLicense::SgiB20 => "SGI-B-2.0",
            SPDXLicense::Simpl20 => "SimPL-2.0",
            SPDXLicense::Sissl12 => "SISSL-1.2",
            SPDXLicense::Sissl => "SISSL",
            SPDXLicense::Sleepycat => "Sleepycat",
            SPDXLicense::Smlnj => "SMLNJ",
            SPDXLicense::Smppl => "SMPPL",
            SPDXLicense::Snia => "SNIA",
            SPDXLicense::Spencer86 => "Spencer-86",
            SPDXLicense::Spencer94 => "Spencer-94",
            SPDXLicense::Spencer99 => "Spencer-99",
            SPDXLicense::Spl10 => "SPL-1.0",
            SPDXLicense::Sugarcrm113 => "SugarCRM-1.1.3",
            SPDXLicense::Swl => "SWL",
            SPDXLicense::Tcl => "TCL",
            SPDXLicense::TcpWrappers => "TCP-wrappers",
            SPDXLicense::Tmate => "TMate",
            SPDXLicense::Torque11 => "TORQUE-1.1",
            SPDXLicense::Tosl => "TOSL",
            SPDXLicense::UnicodeDfs2015 => "Unicode-DFS-2015",
            SPDXLicense::UnicodeDfs2016 => "Unicode-DFS-2016",
            SPDXLicense::UnicodeTou => "Unicode-TOU",
            SPDXLicense::Unlicense => "Unlicense",
            SPDXLicense::Upl10 => "UPL-1.0",
            SPDXLicense::Vim => "Vim",
            SPDXLicense::Vostrom => "VOSTROM",
            SPDXLicense::Vsl10 => "VSL-1.0",
            SPDXLicense::W3c19980720 => "W3C-19980720",
            SPDXLicense::W3c20150513 => "W3C-20150513",
            SPDXLicense::W3c => "W3C",
            SPDXLicense::Watcom10 => "Watcom-1.0",
            SPDXLicense::Wsuipa => "Wsuipa",
            SPDXLicense::Wtfpl => "WTFPL",
            SPDXLicense::X11 => "X11",
            SPDXLicense::Xerox => "Xerox",
            SPDXLicense::Xfree8611 => "XFree86-1.1",
            SPDXLicense::Xinetd => "xinetd",
            SPDXLicense::Xnet => "Xnet",
            SPDXLicense::Xpp => "xpp",
            SPDXLicense::Xskat => "XSkat",
            SPDXLicense::Ypl10 => "YPL-1.0",
            SPDXLicense::Ypl11 => "YPL-1.1",
            SPDXLicense::Zed => "Zed",
            SPDXLicense::Zend20 => "Zend-2.0",
            SPDXLicense::Zimbra13 => "Zimbra-1.3",
            SPDXLicense::Zimbra14 => "Zimbra-1.4",
            SPDXLicense::ZlibAcknowledgement => "zlib-acknowledgement",
            SPDXLicense::Zlib => "Zlib",
            SPDXLicense::Zpl11 => "ZPL-1.1",
            SPDXLicense::Zpl20 => "ZPL-2.0",
            SPDXLicense::Zpl21 => "ZPL-2.1",
        }
    }
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        match code {
            "not-open-source" => Ok(SPDXLicense::NotOpenSource),
            "0BSD" => Ok(SPDXLicense::N0bsd),
            "AAL" => Ok(SPDXLicense::Aal),
            "Abstyles" => Ok(SPDXLicense::Abstyles),
            "Adobe-2006" => Ok(SPDXLicense::Adobe2006),
            "Adobe-Glyph" => Ok(SPDXLicense::AdobeGlyph),
            "ADSL" => Ok(SPDXLicense::Adsl),
            "AFL-1.1" => Ok(SPDXLicense::Afl11),
            "AFL-1.2" => Ok(SPDXLicense::Afl12),
            "AFL-2.0" => Ok(SPDXLicense::Afl20),
            "AFL-2.1" => Ok(SPDXLicense::Afl21),
            "AFL-3.0" => Ok(SPDXLicense::Afl30),
            "Afmparse" => Ok(SPDXLicense::Afmparse),
            "AGPL-1.0-only" => Ok(SPDXLicense::Agpl10Only),
            "AGPL-1.0-or-later" => Ok(SPDXLicense::Agpl10OrLater),
            "AGPL-3.0-only" => Ok(SPDXLicense::Agpl30Only),
            "AGPL-3.0-or-later" => Ok(SPDXLicense::Agpl30OrLater),
            "Aladdin" => Ok(SPDXLicense::Aladdin),
            "AMDPLPA" => Ok(SPDXLicense::Amdplpa),
            "AML" => Ok(SPDXLicense::Aml),
            "AMPAS" => Ok(SPDXLicense::Ampas),
            "ANTLR-PD" => Ok(SPDXLicense::AntlrPd),
            "Apache-1.0" => Ok(SPDXLicense::Apache10),
            "Apache-1.1" => Ok(SPDXLicense::Apache11),
            "Apache-2.0" => Ok(SPDXLicense::Apache20),
            "APAFML" => Ok(SPDXLicense::Apafml),
            "APL-1.0" => Ok(SPDXLicense::Apl10),
            "APSL-1.0" => Ok(SPDXLicense::Apsl10),
            "APSL-1.1" => Ok(SPDXLicense::Apsl11),
            "APSL-1.2" => Ok(SPDXLicense::Apsl12),
            "APSL-2.0" => Ok(SPDXLicense::Apsl20),
            "Artistic-1.0-cl8" => Ok(SPDXLicense::Artistic10Cl8),
            "Artistic-1.0-Perl" => Ok(SPDXLicense::Artistic10Perl),
            "Artistic-1.0" => Ok(SPDXLicense::Artistic10),
            "Artistic-2.0" => Ok(SPDXLicense::Artistic20),
            "Bahyph" => Ok(SPDXLicense::Bahyph),
            "Barr" => Ok(SPDXLicense::Barr),
            "Beerware" => Ok(SPDXLicense::Beerware),
            "BitTorrent-1.0" => Ok(SPDXLicense::Bittorrent10),
            "BitTorrent-1.1" => Ok(SPDXLicense::Bittorrent11),
            "Borceux" => Ok(SPDXLicense::Borceux),
            "BSD-1-Clause" => Ok(SPDXLicense::Bsd1Clause),
            "BSD-2-Clause-FreeBSD" => Ok(SPDXLicense::Bsd2ClauseFreebsd),
            "BSD-2-Clause-NetBSD" => Ok(SPDXLicense::Bsd2ClauseNetbsd),
            "BSD-2-Clause-Patent" => Ok(SPDXLicense::Bsd2ClausePatent),
            "BSD-2-Clause" => Ok(SPDXLicense::Bsd2Clause),
            "BSD-3-Clause-Attribution" => Ok(SPDXLicense::Bsd3ClauseAttribution),
            "BSD-3-Clause-Clear" => Ok(SPDXLicense::Bsd3ClauseClear),
            "BSD-3-Clause-LBNL" => Ok(SPDXLicense::Bsd3ClauseLbnl),
            "BSD-3-Clause-No-Nuclear-License-2014" => {
                Ok(SPDXLicense::Bsd3ClauseNoNuclearLicense2014)
            }
            "BSD-3-Clause-No-Nuclear-License" => {
                Ok(SPDXLicense::Bsd3ClauseNoNuclearLicense)
            }
            "BSD-3-Clause-No-Nuclear-Warranty" => {
                Ok(SPDXLicense::Bsd3ClauseNoNuclearWarranty)
            }
            "BSD-3-Clause" => Ok(SPDXLicense::Bsd3Clause),
            "BSD-4-Clause-UC" => Ok(SPDXLicense::Bsd4ClauseUc),
            "BSD-4-Clause" => Ok(SPDXLicense::Bsd4Clause),
            "BSD-Protection" => Ok(SPDXLicense::BsdProtection),
            "BSD-Source-Code" => Ok(SPDXLicense::BsdSourceCode),
            "BSL-1.0" => Ok(SPDXLicense::Bsl10),
            "bzip2-1.0.5" => Ok(SPDXLicense::Bzip2105),
            "bzip2-1.0.6" => Ok(SPDXLicense::Bzip2106),
            "Caldera" => Ok(SPDXLicense::Caldera),
            "CATOSL-1.1" => Ok(SPDXLicense::Catosl11),
            "CC-BY-1.0" => Ok(SPDXLicense::CcBy10),
            "CC-BY-2.0" => Ok(SPDXLicense::CcBy20),
            "CC-BY-2.5" => Ok(SPDXLicense::CcBy25),
            "CC-BY-3.0" => Ok(SPDXLicense::CcBy30),
            "CC-BY-4.0" => Ok(SPDXLicense::CcBy40),
            "CC-BY-NC-1.0" => Ok(SPDXLicense::CcByNc10),
            "CC-BY-NC-2.0" => Ok(SPDXLicense::CcByNc20),
            "CC-BY-NC-2.5" => Ok(SPDXLicense::CcByNc25),
            "CC-BY-NC-3.0" => Ok(SPDXLicense::CcByNc30),
            "CC-BY-NC-4.0" => Ok(SPDXLicense::CcByNc40),
            "CC-BY-NC-ND-1.0" => Ok(SPDXLicense::CcByNcNd10),
            "CC-BY-NC-ND-2.0" => Ok(SPDXLicense::CcByNcNd20),
            "CC-BY-NC-ND-2.5" => Ok(SPDXLicense::CcByNcNd25),
            "CC-BY-NC-ND-3.0" => Ok(SPDXLicense::CcByNcNd30),
            "CC-BY-NC-ND-4.0" => Ok(SPDXLicense::CcByNcNd40),
            "CC-BY-NC-SA-1.0" => Ok(SPDXLicense::CcByNcSa10),
            "CC-BY-NC-SA-2.0" => Ok(SPDXLicense::CcByNcSa20),
            "CC-BY-NC-SA-2.5" => Ok(SPDXLicense::CcByNcSa25),
            "CC-BY-NC-SA-3.0" => Ok(SPDXLicense::CcByNcSa30),
            "CC-BY-NC-SA-4.0" => Ok(SPDXLicense::CcByNcSa40),
            "CC-BY-ND-1.0" => Ok(SPDXLicense::CcByNd10),
            "CC-BY-ND-2.0" => Ok(SPDXLicense::CcByNd20),
            "CC-BY-ND-2.5" => Ok(SPDXLicense::CcByNd25),
            "CC-BY-ND-3.0" => Ok(SPDXLicense::CcByNd30),
            "CC-BY-ND-4.0" => Ok(SPDXLicense::CcByNd40),
            "CC-BY-SA-1.0" => Ok(SPDXLicense::CcBySa10),
            "CC-BY-SA-2.0" => Ok(SPDXLicense::CcBySa20),
            "CC-BY-SA-2.5" => Ok(SPDXLicense::CcBySa25),
            "CC-BY-SA-3.0" => Ok(SPDXLicense::CcBySa30),
            "CC-BY-SA-4.0" => Ok(SPDXLicense::CcBySa40),
            "CC0-1.0" => Ok(SPDXLicense::Cc010),
            "CDDL-1.0" => Ok(SPDXLicense::Cddl10),
            "CDDL-1.1" => Ok(SPDXLicense::Cddl11),
            "CDLA-Permissive-1.0" => Ok(SPDXLicense::CdlaPermissive10),
            "CDLA-Sharing-1.0" => Ok(SPDXLicense::CdlaSharing10),
            "CECILL-1.0" => Ok(SPDXLicense::Cecill10),
            "CECILL-1.1" => Ok(SPDXLicense::Cecill11),
            "CECILL-2.0" => Ok(SPDXLicense::Cecill20),
            "CECILL-2.1" => Ok(SPDXLicense::Cecill21),
            "CECILL-B" => Ok(SPDXLicense::CecillB),
            "CECILL-C" => Ok(SPDXLicense::CecillC),
            "ClArtistic" => Ok(SPDXLicense::Clartistic),
            "CNRI-Jython" => Ok(SPDXLicense::CnriJython),
            "CNRI-Python-GPL-Compatible" => Ok(SPDXLicense::CnriPythonGplCompatible),
            "CNRI-Python" => Ok(SPDXLicense::CnriPython),
            "Condor-1.1" => Ok(SPDXLicense::Condor11),
            "CPAL-1.0" => Ok(SPDXLicense::Cpal10),
            "CPL-1.0" => Ok(SPDXLicense::Cpl10),
            "CPOL-1.02" => Ok(SPDXLicense::Cpol102),
            "Crossword" => Ok(SPDXLicense::Crossword),
            "CrystalStacker" => Ok(SPDXLicense::Crystalstacker),
            "CUA-OPL-1.0" => Ok(SPDXLicense::CuaOpl10),
            "Cube" => Ok(SPDXLicense::Cube),
            "curl" => Ok(SPDXLicense::Curl),
            "D-FSL-1.0" => Ok(SPDXLicense::DFsl10),
            "diffmark" => Ok(SPDXLicense::Diffmark),
            "DOC" => Ok(SPDXLicense::Doc),
            "Dotseqn" => Ok(SPDXLicense::Dotseqn),
            "DSDP" => Ok(SPDXLicense::Dsdp),
            "dvipdfm" => Ok(SPDXLicense::Dvipdfm),
            "ECL-1.0" => Ok(SPDXLicense::Ecl10),
            "ECL-2.0" => Ok(SPDXLicense::Ecl20),
            "EFL-1.0" => Ok(SPDXLicense::Efl10),
            "EFL-2.0" => Ok(SPDXLicense::Efl20),
            "eGenix" => Ok(SPDXLicense::Egenix),
            "Entessa" => Ok(SPDXLicense::Entessa),
            "EPL-1.0" => Ok(SPDXLicense::Epl10),
            "EPL-2.0" => Ok(SPDXLicense::Epl20),
            "ErlPL-1.1" => Ok(SPDXLicense::Erlpl11),
            "EUDatagrid" => Ok(SPDXLicense::Eudatagrid),
            "EUPL-1.0" => Ok(SPDXLicense::Eupl10),
            "EUPL-1.1" => Ok(SPDXLicense::Eupl11),
            "EUPL-1.2" => Ok(SPDXLicense::Eupl12),
            "Eurosym" => Ok(SPDXLicense::Eurosym),
            "Fair" => Ok(SPDXLicense::Fair),
            "Frameworx-1.0" => Ok(SPDXLicense::Frameworx10),
            "FreeImage" => Ok(SPDXLicense::Freeimage),
            "FSFAP" => Ok(SPDXLicense::Fsfap),
            "FSFUL" => Ok(SPDXLicense::Fsful),
            "FSFULLR" => Ok(SPDXLicense::Fsfullr),
            "FTL" => Ok(SPDXLicense::Ftl),
            "GFDL-1.1-only" => Ok(SPDXLicense::Gfdl11Only),
            "GFDL-1.1-or-later" => Ok(SPDXLicense::Gfdl11OrLater),
            "GFDL-1.2-only" => Ok(SPDXLicense::Gfdl12Only),
            "GFDL-1.2-or-later" => Ok(SPDXLicense::Gfdl12OrLater),
            "GFDL-1.3-only" => Ok(SPDXLicense::Gfdl13Only),
            "GFDL-1.3-or-later" => Ok(SPDXLicense::Gfdl13OrLater),
            "Giftware" => Ok(SPDXLicense::Giftware),
            "GL2PS" => Ok(SPDXLicense::Gl2ps),
            "Glide" => Ok(SPDXLicense::Glide),
            "Glulxe" => Ok(SPDXLicense::Glulxe),
            "gnuplot" => Ok(SPDXLicense::Gnuplot),
            "GPL-1.0-only" => Ok(SPDXLicense::Gpl10Only),
            "GPL-1.0-or-later" => Ok(SPDXLicense::Gpl10OrLater),
            "GPL-2.0-only" => Ok(SPDXLicense::Gpl20Only),
            "GPL-2.0-or-later" => Ok(SPDXLicense::Gpl20OrLater),
            "GPL-3.0-only" => Ok(SPDXLicense::Gpl30Only),
            "GPL-3.0-or-later" => Ok(SPDXLicense::Gpl30OrLater),
            "gSOAP-1.3b" => Ok(SPDXLicense::Gsoap13b),
            "HaskellReport" => Ok(SPDXLicense::Haskellreport),
            "HPND" => Ok(SPDXLicense::Hpnd),
            "IBM-pibs" => Ok(SPDXLicense::IbmPibs),
            "ICU" => Ok(SPDXLicense::Icu),
            "IJG" => Ok(SPDXLicense::Ijg),
            "ImageMagick" => Ok(SPDXLicense::Imagemagick),
            "iMatix" => Ok(SPDXLicense::Imatix),
            "Imlib2" => Ok(SPDXLicense::Imlib2),
            "Info-ZIP" => Ok(SPDXLicense::InfoZip),
            "Intel-ACPI" => Ok(SPDXLicense::IntelAcpi),
            "Intel" => Ok(SPDXLicense::Intel),
            "Interbase-1.0" => Ok(SPDXLicense::Interbase10),
            "IPA" => Ok(SPDXLicense::Ipa),
            "IPL-1.0" => Ok(SPDXLicense::Ipl10),
            "ISC" => Ok(SPDXLicense::Isc),
            "JasPer-2.0" => Ok(SPDXLicense::Jasper20),
            "JSON" => Ok(SPDXLicense::Json),
            "LAL-1.2" => Ok(SPDXLicense::Lal12),
            "LAL-1.3" => Ok(SPDXLicense::Lal13),
            "Latex2e" => Ok(SPDXLicense::Latex2e),
            "Leptonica" => Ok(SPDXLicense::Leptonica),
            "LGPL-2.0-only" => Ok(SPDXLicense::Lgpl20Only),
            "LGPL-2.0-or-later" => Ok(SPDXLicense::Lgpl20OrLater),
            "LGPL-2.1-only" => Ok(SPDXLicense::Lgpl21Only),
            "LGPL-2.1-or-later" => Ok(SPDXLicense::Lgpl21OrLater),
            "LGPL-3.0-only" => Ok(SPDXLicense::Lgpl30Only),
            "LGPL-3.0-or-later" => Ok(SPDXLicense::Lgpl30OrLater),
            "LGPLLR" => Ok(SPDXLicense::Lgpllr),
            "Libpng" => Ok(SPDXLicense::Libpng),
            "libtiff" => Ok(SPDXLicense::Libtiff),
            "LiLiQ-P-1.1" => Ok(SPDXLicense::LiliqP11),
            "LiLiQ-R-1.1" => Ok(SPDXLicense::LiliqR11),
            "LiLiQ-Rplus-1.1" => Ok(SPDXLicense::LiliqRplus11),
            "Linux-OpenIB" => Ok(SPDXLicense::LinuxOpenib),
            "LPL-1.0" => Ok(SPDXLicense::Lpl10),
            "LPL-1.02" => Ok(SPDXLicense::Lpl102),
            "LPPL-1.0" => Ok(SPDXLicense::Lppl10),
            "LPPL-1.1" => Ok(SPDXLicense::Lppl11),
            "LPPL-1.2" => Ok(SPDXLicense::Lppl12),
            "LPPL-1.3a" => Ok(SPDXLicense::Lppl13a),
            "LPPL-1.3c" => Ok(SPDXLicense::Lppl13c),
            "MakeIndex" => Ok(SPDXLicense::Makeindex),
            "MirOS" => Ok(SPDXLicense::Miros),
            "MIT-0" => Ok(SPDXLicense::Mit0),
            "MIT-advertising" => Ok(SPDXLicense::MitAdvertising),
            "MIT-CMU" => Ok(SPDXLicense::MitCmu),
            "MIT-enna" => Ok(SPDXLicense::MitEnna),
            "MIT-feh" => Ok(SPDXLicense::MitFeh),
            "MIT" => Ok(SPDXLicense::Mit),
            "MITNFA" => Ok(SPDXLicense::Mitnfa),
            "Motosoto" => Ok(SPDXLicense::Motosoto),
            "mpich2" => Ok(SPDXLicense::Mpich2),
            "MPL-1.0" => Ok(SPDXLicense::Mpl10),
            "MPL-1.1" => Ok(SPDXLicense::Mpl11),
            "MPL-2.0-no-copyleft-exception" => Ok(SPDXLicense::Mpl20NoCopyleftException),
            "MPL-2.0" => Ok(SPDXLicense::Mpl20),
            "MS-PL" => Ok(SPDXLicense::MsPl),
            "MS-RL" => Ok(SPDXLicense::MsRl),
            "MTLL" => Ok(SPDXLicense::Mtll),
            "Multics" => Ok(SPDXLicense::Multics),
            "Mup" => Ok(SPDXLicense::Mup),
            "NASA-1.3" => Ok(SPDXLicense::Nasa13),
            "Naumen" => Ok(SPDXLicense::Naumen),
            "NBPL-1.0" => Ok(SPDXLicense::Nbpl10),
            "NCSA" => Ok(SPDXLicense::Ncsa),
            "Net-SNMP" => Ok(SPDXLicense::NetSnmp),
            "NetCDF" => Ok(SPDXLicense::Netcdf),
            "Newsletr" => Ok(SPDXLicense::Newsletr),
            "NGPL" => Ok(SPDXLicense::Ngpl),
            "NLOD-1.0" => Ok(SPDXLicense::Nlod10),
            "NLPL" => Ok(SPDXLicense::Nlpl),
            "Nokia" => Ok(SPDXLicense::Nokia),
            "NOSL" => Ok(SPDXLicense::Nosl),
            "Noweb" => Ok(SPDXLicense::Noweb),
            "NPL-1.0" => Ok(SPDXLicense::Npl10),
            "NPL-1.1" => Ok(SPDXLicense::Npl11),
            "NPOSL-3.0" => Ok(SPDXLicense::Nposl30),
            "NRL" => Ok(SPDXLicense::Nrl),
            "NTP" => Ok(SPDXLicense::Ntp),
            "OCCT-PL" => Ok(SPDXLicense::OcctPl),
            "OCLC-2.0" => Ok(SPDXLicense::Oclc20),
            "ODbL-1.0" => Ok(SPDXLicense::Odbl10),
            "OFL-1.0" => Ok(SPDXLicense::Ofl10),
            "OFL-1.1" => Ok(SPDXLicense::Ofl11),
            "OGTSL" => Ok(SPDXLicense::Ogtsl),
            "OLDAP-1.1" => Ok(SPDXLicense::Oldap11),
            "OLDAP-1.2" => Ok(SPDXLicense::Oldap12),
            "OLDAP-1.3" => Ok(SPDXLicense::Oldap13),
            "OLDAP-1.4" => Ok(SPDXLicense::Oldap14),
            "OLDAP-2.0.1" => Ok(SPDXLicense::Oldap201),
            "OLDAP-2.0" => Ok(SPDXLicense::Oldap20),
            "OLDAP-2.1" => Ok(SPDXLicense::Oldap21),
            "OLDAP-2.2.1" => Ok(SPDXLicense::Oldap221),
            "OLDAP-2.2.2" => Ok(SPDXLicense::Oldap222),
            "OLDAP-2.2" => Ok(SPDXLicense::Oldap22),
            "OLDAP-2.3" => Ok(SPDXLicense::Oldap23),
            "OLDAP-2.4" => Ok(SPDXLicense::Oldap24),
            "OLDAP-2.5" => Ok(SPDXLicense::Oldap25),
            "OLDAP-2.6" => Ok(SPDXLicense::Oldap26),
            "OLDAP-2.7" => Ok(SPDXLicense::Oldap27),
            "OLDAP-2.8" => Ok(SPDXLicense::Oldap28),
            "OML" => Ok(SPDXLicense::Oml),
            "OpenSSL" => Ok(SPDXLicense::Openssl),
            "OPL-1.0" => Ok(SPDXLicense::Opl10),
            "OSET-PL-2.1" => Ok(SPDXLicense::OsetPl21),
            "OSL-1.0" => Ok(SPDXLicense::Osl10),
            "OSL-1.1" => Ok(SPDXLicense::Osl11),
            "OSL-2.0" => Ok(SPDXLicense::Osl20),
            "OSL-2.1" => Ok(SPDXLicense::Osl21),
            "OSL-3.0" => Ok(SPDXLicense::Osl30),
            "PDDL-1.0" => Ok(SPDXLicense::Pddl10),
            "PHP-3.0" => Ok(SPDXLicense::Php30),
            "PHP-3.01" => Ok(SPDXLicense::Php301),
            "Plexus" => Ok(SPDXLicense::Plexus),
            "PostgreSQL" => Ok(SPDXLicense::Postgresql),
            "psfrag" => Ok(SPDXLicense::Psfrag),
            "psutils" => Ok(SPDXLicense::Psutils),
            "Python-2.0" => Ok(SPDXLicense::Python20),
            "Qhull" => Ok(SPDXLicense::Qhull),
            "QPL-1.0" => Ok(SPDXLicense::Qpl10),
            "Rdisc" => Ok(SPDXLicense::Rdisc),
            "RHeCos-1.1" => Ok(SPDXLicense::Rhecos11),
            "RPL-1.1" => Ok(SPDXLicense::Rpl11),
            "RPL-1.5" => Ok(SPDXLicense::Rpl15),
            "RPSL-1.0" => Ok(SPDXLicense::Rpsl10),
            "RSA-MD" => Ok(SPDXLicense::RsaMd),
            "RSCPL" => Ok(SPDXLicense::Rscpl),
            "Ruby" => Ok(SPDXLicense::Ruby),
            "SAX-PD" => Ok(SPDXLicense::SaxPd),
            "Saxpath" => Ok(SPDXLicense::Saxpath),
            "SCEA" => Ok(SPDXLicense::Scea),
            "Sendmail" => Ok(SPDXLicense::Sendmail),
            "SGI-B-1.0" => Ok(SPDXLicense::SgiB10),
            "SGI-B-1.1" => Ok(SPDXLicense::SgiB11),
            "SGI-B-2.0" => Ok(SPDXLicense::SgiB20),
            "SimPL-2.0" => Ok(SPDXLicense::Simpl20),
            "SISSL-1.2" => Ok(SPDXLicense::Sissl12),
            "SISSL" => Ok(SPDXLicense::Sissl),
            "Sleepycat" => Ok(SPDXLicense::Sleepycat),
            "SMLNJ" => Ok(SPDXLicense::Smlnj),
            "SMPPL" => Ok(SPDXLicense::Smppl),
            "SNIA" => Ok(SPDXLicense::Snia),
            "Spencer-86" => Ok(SPDXLicense::Spencer86),
            "Spencer-94" => Ok(SPDXLicense::Spencer94),
            "Spencer-99" => Ok(SPDXLicense::Spencer99),
            "SPL-1.0" => Ok(SPDXLicense::Spl10),
            "SugarCRM-1.1.3" => Ok(SPDXLicense::Sugarcrm113),
            "SWL" => Ok(SPDXLicense::Swl),
            "TCL" => Ok(SPDXLicense::Tcl),
            "TCP-wrappers" => Ok(SPDXLicense::TcpWrappers),
            "TMate" => Ok(SPDXLicense::Tmate),
            "TORQUE-1.1" => Ok(SPDXLicense::Torque11),
            "TOSL" => Ok(SPDXLicense::Tosl),
            "Unicode-DFS-2015" => Ok(SPDXLicense::UnicodeDfs2015),
            "Unicode-DFS-2016" => Ok(SPDXLicense::UnicodeDfs2016),
            "Unicode-TOU" => Ok(SPDXLicense::UnicodeTou),
            "Unlicense" => Ok(SPDXLicense::Unlicense),
            "UPL-1.0" => Ok(SPDXLicense::Upl10),
            "Vim" => Ok(SPDXLicense::Vim),
            "VOSTROM" => Ok(SPDXLicense::Vostrom),
            "VSL-1.0" => Ok(SPDXLicense::Vsl10),
            "W3C-19980720" => Ok(SPDXLicense::W3c19980720),
            "W3C-20150513" => Ok(SPDXLicense::W3c20150513),
            "W3C" => Ok(SPDXLicense::W3c),
            "Watcom-1.0" => Ok(SPDXLicense::Watcom10),
            "Wsuipa" => Ok(SPDXLicense::Wsuipa),
            "WTFPL" => Ok(SPDXLicense::Wtfpl),
            "X11" => Ok(SPDXLicense::X11),
            "Xerox" => Ok(SPDXLicense::Xerox),
            "XFree86-1.1" => Ok(SPDXLicense::Xfree8611),
            "xinetd" => Ok(SPDXLicense::Xinetd),
            "Xnet" => Ok(SPDXLicense::Xnet),
            "xpp" => Ok(SPDXLicense::Xpp),
            "XSkat" => Ok(SPDXLicense::Xskat),
            "YPL-1.0" => Ok(SPDXLicense::Ypl10),
            "YPL-1.1" => Ok(SPDXLicense::Ypl11),
            "Zed" => Ok(SPDXLicense::Zed),
            "Zend-2.0" => Ok(SPDXLicense::Zend20),
            "Zimbra-1.3" => Ok(SPDXLicense::Zimbra13),
            "Zimbra-1.4" => Ok(SPDXLicense::Zimbra14),
            "zlib-acknowledgement" => Ok(SPDXLicense::ZlibAcknowledgement),
            "Zlib" => Ok(SPDXLicense::Zlib),
            "ZPL-1.1" => Ok(SPDXLicense::Zpl11),
            "ZPL-2.0" => Ok(SPDXLicense::Zpl20),
            "ZPL-2.1" => Ok(SPDXLicense::Zpl21),
            _ => Err(CodeError::unknown_code(Self::URL, code)),
        }
    }
}
impl core::convert::TryFrom<&str> for SPDXLicense {
    type Error = CodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::str::FromStr for SPDXLicense {
    type Err = CodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as CodeSystem>::try_from_code(s)
    }
}
impl core::fmt::Display for SPDXLicense {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_code())
    }
}
