//! vCard content line fixtures.
//!
//! Examples taken from RFC 6350 and common use cases, written exactly as the
//! renderer produces them.

/// Lines that render back byte-for-byte on a vCard 4.0 document.
pub const V4_LINES: &[&str] = &[
    "FN:Simon Perreault",
    "N:Perreault;Simon;;;ing. jr,M.Sc.",
    "N:Smith\\, Jr.;John;;;",
    "item_1.X_FOO:v",
    "X-EMPTY:",
    "LANG;PREF=2:en",
    "ORG;TYPE=work:Viagenie",
    "TEL;VALUE=uri;TYPE=work,voice;PREF=1:tel:+1-418-656-9254;ext=102",
    "EMAIL;TYPE=work:simon.perreault@viagenie.ca",
    "URL;TYPE=home:http://nomis80.org",
    "item1.EMAIL;TYPE=uri:joe@strummer.com",
    "item2.X-ABLABEL:HomePage",
    "NOTE:Line1\\nLine2\\, with comma\\; and semicolon",
    "NOTE:C:\\\\Users\\\\joe",
    "ADR;TYPE=home;LABEL=\"1 Main St, Anytown\":;;1 Main St;Anytown;CA;12345;USA",
    "X-CUSTOM;X-PARAM=\"a:b\":value",
    "PHOTO;MEDIATYPE=image/jpeg:http://example.com/photo.jpg",
];

/// Lines that render back byte-for-byte on a vCard 3.0 document.
pub const V3_LINES: &[&str] = &[
    "FN:Joe Strummer",
    "N:Strummer;Joe;;;",
    "EMAIL;TYPE=internet;TYPE=pref:joe@strummer.com",
    "TEL;TYPE=cell;TYPE=pref:+44 20 7946 0000",
    "item1.ADR;TYPE=home:;;Street\\nApt 1;City;State;Zip;Country",
];

/// RFC 6350 §7 author example lines that normalize on first render.
pub const NORMALIZING_LINES: &[&str] = &[
    "TEL;TYPE=home,pref:555",
    "EMAIL;TYPE=\"work\":simon@example.com",
    "item1.X-ABLABEL:_$!<Other>!$_",
    "tel;pref=0:555",
];

/// A value long enough to fold several times at common widths.
pub const LONG_VALUE: &str = "qwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwertqwert";
